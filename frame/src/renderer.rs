//! Rendering of entities and values into browser text.

use std::collections::HashMap;

use protege_owl::{
    vocab, AnnotationProperty, AnnotationValue, Axiom, Class, DataProperty, Datatype, Entity,
    Iri, Literal, NamedIndividual, ObjectProperty, Ontology,
};

use crate::data::{AnnotationValueData, EntityData, LiteralData};

/// Produces display labels for entities, IRIs and annotation values.
///
/// Implementors supply [`entity_browser_text`](Self::entity_browser_text);
/// everything else has a default built on it.
pub trait ContextRenderer {
    /// Returns the display label of `entity`.
    fn entity_browser_text(&self, entity: &Entity) -> String;

    /// Returns the display label of an IRI that may not name an entity.
    fn iri_browser_text(&self, iri: &Iri) -> String {
        iri.short_form().to_owned()
    }

    /// Renders an entity of any kind.
    fn entity_data(&self, entity: &Entity) -> EntityData<Entity> {
        EntityData::new(entity.clone(), self.entity_browser_text(entity))
    }

    /// Renders a class.
    fn class_data(&self, class: &Class) -> EntityData<Class> {
        render(self, class)
    }

    /// Renders an object property.
    fn object_property_data(&self, property: &ObjectProperty) -> EntityData<ObjectProperty> {
        render(self, property)
    }

    /// Renders a data property.
    fn data_property_data(&self, property: &DataProperty) -> EntityData<DataProperty> {
        render(self, property)
    }

    /// Renders an annotation property.
    fn annotation_property_data(
        &self,
        property: &AnnotationProperty,
    ) -> EntityData<AnnotationProperty> {
        render(self, property)
    }

    /// Renders a named individual.
    fn individual_data(&self, individual: &NamedIndividual) -> EntityData<NamedIndividual> {
        render(self, individual)
    }

    /// Renders a datatype.
    fn datatype_data(&self, datatype: &Datatype) -> EntityData<Datatype> {
        render(self, datatype)
    }

    /// Renders a literal.
    fn literal_data(&self, literal: &Literal) -> LiteralData {
        LiteralData::from(literal.clone())
    }

    /// Renders an annotation value without resolving IRIs to entities.
    fn annotation_value_data(&self, value: &AnnotationValue) -> AnnotationValueData {
        match value {
            AnnotationValue::Iri(iri) => AnnotationValueData::Iri {
                iri: iri.clone(),
                browser_text: self.iri_browser_text(iri),
            },
            AnnotationValue::Literal(lit) => AnnotationValueData::Literal(self.literal_data(lit)),
            AnnotationValue::Anonymous(node) => AnnotationValueData::Anonymous(node.clone()),
        }
    }
}

fn render<R, E>(renderer: &R, entity: &E) -> EntityData<E>
where
    R: ContextRenderer + ?Sized,
    E: Clone + Into<Entity>,
{
    let text = renderer.entity_browser_text(&entity.clone().into());
    EntityData::new(entity.clone(), text)
}

impl<T: ContextRenderer + ?Sized> ContextRenderer for &T {
    fn entity_browser_text(&self, entity: &Entity) -> String {
        (**self).entity_browser_text(entity)
    }

    fn iri_browser_text(&self, iri: &Iri) -> String {
        (**self).iri_browser_text(iri)
    }

    fn entity_data(&self, entity: &Entity) -> EntityData<Entity> {
        (**self).entity_data(entity)
    }

    fn class_data(&self, class: &Class) -> EntityData<Class> {
        (**self).class_data(class)
    }

    fn object_property_data(&self, property: &ObjectProperty) -> EntityData<ObjectProperty> {
        (**self).object_property_data(property)
    }

    fn data_property_data(&self, property: &DataProperty) -> EntityData<DataProperty> {
        (**self).data_property_data(property)
    }

    fn annotation_property_data(
        &self,
        property: &AnnotationProperty,
    ) -> EntityData<AnnotationProperty> {
        (**self).annotation_property_data(property)
    }

    fn individual_data(&self, individual: &NamedIndividual) -> EntityData<NamedIndividual> {
        (**self).individual_data(individual)
    }

    fn datatype_data(&self, datatype: &Datatype) -> EntityData<Datatype> {
        (**self).datatype_data(datatype)
    }

    fn literal_data(&self, literal: &Literal) -> LiteralData {
        (**self).literal_data(literal)
    }

    fn annotation_value_data(&self, value: &AnnotationValue) -> AnnotationValueData {
        (**self).annotation_value_data(value)
    }
}

/// Renders every entity by the short form of its IRI.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortFormRenderer;

impl ContextRenderer for ShortFormRenderer {
    fn entity_browser_text(&self, entity: &Entity) -> String {
        entity.iri().short_form().to_owned()
    }
}

/// Renders entities by their label annotations, falling back to the IRI
/// short form.
///
/// `rdfs:label` is preferred over `skos:prefLabel`. Among labels of the
/// same property a literal in the configured language wins, then an untagged
/// one, then any other; ties break on the lexical form.
#[derive(Debug, Clone, Default)]
pub struct LabelRenderer {
    labels: HashMap<Iri, String>,
}

impl LabelRenderer {
    /// Collects labels from `ontology` without a language preference.
    #[must_use]
    pub fn new(ontology: &Ontology) -> Self {
        Self::with_language(ontology, None)
    }

    /// Collects labels from `ontology`, preferring literals tagged `lang`.
    #[must_use]
    pub fn with_language(ontology: &Ontology, lang: Option<&str>) -> Self {
        let mut best: HashMap<Iri, ((u8, u8), &str)> = HashMap::new();
        for axiom in ontology.axioms() {
            let Axiom::AnnotationAssertion {
                property,
                subject,
                value,
            } = axiom
            else {
                continue;
            };
            let property_rank = match property.iri().as_str() {
                vocab::RDFS_LABEL => 0,
                vocab::SKOS_PREF_LABEL => 1,
                _ => continue,
            };
            let (Some(iri), Some(lit)) = (subject.as_iri(), value.as_literal()) else {
                continue;
            };
            let lang_rank = match (&lit.lang, lang) {
                (Some(_), Some(wanted)) if lit.has_lang(wanted) => 0,
                (None, _) => 1,
                _ => 2,
            };
            let candidate = ((property_rank, lang_rank), lit.lexical.as_str());
            best.entry(iri.clone())
                .and_modify(|current| {
                    if candidate < *current {
                        *current = candidate;
                    }
                })
                .or_insert(candidate);
        }
        let labels = best
            .into_iter()
            .map(|(iri, (_, text))| (iri, text.to_owned()))
            .collect();
        Self { labels }
    }

    /// Returns the label chosen for `iri`, if any.
    #[must_use]
    pub fn label(&self, iri: &Iri) -> Option<&str> {
        self.labels.get(iri).map(String::as_str)
    }

    /// Returns the number of labelled IRIs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if no IRI has a label.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl ContextRenderer for LabelRenderer {
    fn entity_browser_text(&self, entity: &Entity) -> String {
        self.iri_browser_text(entity.iri())
    }

    fn iri_browser_text(&self, iri: &Iri) -> String {
        self.label(iri)
            .map_or_else(|| iri.short_form().to_owned(), str::to_owned)
    }
}
