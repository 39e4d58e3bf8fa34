//! Forward translation of one axiom into property values about a subject.

use std::collections::BTreeSet;

use protege_owl::{
    AnnotationProperty, AnnotationSubject, AnnotationValue, Axiom, ClassExpression, DataProperty,
    EntitiesInSignatureIndex, Entity, Individual, Literal, ObjectPropertyExpression,
};

use crate::class_expression::ClassExpressionTranslator;
use crate::data::AnnotationValueData;
use crate::renderer::ContextRenderer;
use crate::state::State;
use crate::value::PropertyValue;

/// Reads the property values an axiom states about one subject.
///
/// [`translate`](Self::translate) returns `None` when the axiom is not about
/// the subject or has no property-value reading, and `Some` with the values
/// otherwise. `Some` with an empty set means the axiom was understood but
/// yields nothing for this subject.
pub struct AxiomTranslator<'a, R: ?Sized, I: ?Sized> {
    subject: &'a Entity,
    initial_state: State,
    index: &'a I,
    renderer: &'a R,
}

impl<'a, R, I> AxiomTranslator<'a, R, I>
where
    R: ContextRenderer + ?Sized,
    I: EntitiesInSignatureIndex + ?Sized,
{
    /// Creates a translator for axioms about `subject`.
    pub fn new(subject: &'a Entity, initial_state: State, index: &'a I, renderer: &'a R) -> Self {
        Self {
            subject,
            initial_state,
            index,
            renderer,
        }
    }

    /// Translates `axiom`.
    pub fn translate(&self, axiom: &Axiom) -> Option<BTreeSet<PropertyValue>> {
        let values = match axiom {
            Axiom::SubClassOf { sub, sup } => {
                if !sub.is_entity(self.subject) {
                    return None;
                }
                self.class_expression(sup, self.initial_state)
            }
            Axiom::EquivalentClasses { classes } => self.equivalent_classes(classes),
            Axiom::AnnotationAssertion {
                property,
                subject,
                value,
            } => self.annotation_assertion(property, subject, value),
            Axiom::ObjectPropertyAssertion {
                property,
                subject,
                object,
            } => self.object_property_assertion(property, subject, object),
            Axiom::DataPropertyAssertion {
                property,
                subject,
                object,
            } => self.data_property_assertion(property, subject, object),
            Axiom::ClassAssertion { class, individual } => {
                if !individual.is_entity(self.subject) {
                    return None;
                }
                self.class_expression(class, self.initial_state)
            }
            _ => None,
        };
        tracing::trace!(
            subject = %self.subject,
            axiom = axiom.keyword(),
            values = values.as_ref().map(BTreeSet::len),
            "translated axiom"
        );
        values
    }

    fn class_expression(&self, ce: &ClassExpression, state: State) -> Option<BTreeSet<PropertyValue>> {
        ClassExpressionTranslator::new(state, self.renderer).translate(ce)
    }

    fn equivalent_classes(&self, classes: &[ClassExpression]) -> Option<BTreeSet<PropertyValue>> {
        if !self.subject.is_class() {
            return Some(BTreeSet::new());
        }
        if !classes.iter().any(|ce| ce.is_entity(self.subject)) {
            return None;
        }
        let values = classes
            .iter()
            .filter(|ce| !ce.is_entity(self.subject))
            .flat_map(ClassExpression::as_conjunct_set)
            .filter_map(|conjunct| self.class_expression(&conjunct, State::Derived))
            .flatten()
            .collect();
        Some(values)
    }

    fn annotation_assertion(
        &self,
        property: &AnnotationProperty,
        subject: &AnnotationSubject,
        value: &AnnotationValue,
    ) -> Option<BTreeSet<PropertyValue>> {
        if subject.as_iri() != Some(self.subject.iri()) {
            return None;
        }
        let property = self.renderer.annotation_property_data(property);
        let entities = value
            .as_iri()
            .map(|iri| self.index.entities_in_signature(iri))
            .unwrap_or_default();
        let rendered: Vec<AnnotationValueData> = if entities.is_empty() {
            vec![self.renderer.annotation_value_data(value)]
        } else {
            entities
                .iter()
                .map(|entity| AnnotationValueData::Entity(self.renderer.entity_data(entity)))
                .collect()
        };
        let values = rendered
            .into_iter()
            .map(|value| PropertyValue::Annotation {
                property: property.clone(),
                value,
                state: State::Asserted,
            })
            .collect();
        Some(values)
    }

    fn object_property_assertion(
        &self,
        property: &ObjectPropertyExpression,
        subject: &Individual,
        object: &Individual,
    ) -> Option<BTreeSet<PropertyValue>> {
        if !subject.is_entity(self.subject) {
            return None;
        }
        let (Some(property), Some(object)) = (property.as_named(), object.as_named()) else {
            return None;
        };
        Some(BTreeSet::from([PropertyValue::Individual {
            property: self.renderer.object_property_data(property),
            value: self.renderer.individual_data(object),
            state: State::Asserted,
        }]))
    }

    fn data_property_assertion(
        &self,
        property: &DataProperty,
        subject: &Individual,
        object: &Literal,
    ) -> Option<BTreeSet<PropertyValue>> {
        if !subject.is_entity(self.subject) {
            return None;
        }
        Some(BTreeSet::from([PropertyValue::Literal {
            property: self.renderer.data_property_data(property),
            value: self.renderer.literal_data(object),
            state: State::Asserted,
        }]))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::renderer::ShortFormRenderer;
    use protege_owl::{
        Class, Datatype, Iri, NamedIndividual, ObjectProperty, SignatureIndex, vocab,
    };

    const NS: &str = "http://ex.org/o#";

    fn iri(local: &str) -> String {
        format!("{NS}{local}")
    }

    fn class(local: &str) -> Class {
        Class::new(iri(local))
    }

    fn translate(subject: &Entity, axiom: &Axiom, index: &SignatureIndex) -> Option<BTreeSet<PropertyValue>> {
        AxiomTranslator::new(subject, State::Asserted, index, &ShortFormRenderer).translate(axiom)
    }

    fn has_part() -> ObjectProperty {
        ObjectProperty::new(iri("hasPart"))
    }

    #[test]
    fn sub_class_of_is_read_from_the_sub_class_side_only() {
        let axiom = Axiom::sub_class_of(class("A"), ClassExpression::some(has_part(), class("B")));
        let index = SignatureIndex::default();
        let values = translate(&class("A").into(), &axiom, &index).unwrap_or_default();
        assert_eq!(values.len(), 1);
        assert!(translate(&class("B").into(), &axiom, &index).is_none());
    }

    #[test]
    fn sub_class_of_named_super_class_has_no_value() {
        let axiom = Axiom::sub_class_of(class("A"), class("B"));
        assert!(translate(&class("A").into(), &axiom, &SignatureIndex::default()).is_none());
    }

    #[test]
    fn equivalent_classes_yield_derived_conjuncts() {
        let definition = ClassExpression::and([
            class("B").into(),
            ClassExpression::some(has_part(), class("C")),
            ClassExpression::data_some(DataProperty::new(iri("size")), Datatype::new(vocab::XSD_INTEGER)),
        ]);
        let axiom = Axiom::equivalent_classes([class("A").into(), definition]);
        let values = translate(&class("A").into(), &axiom, &SignatureIndex::default())
            .unwrap_or_default();
        assert_eq!(values.len(), 2);
        assert!(values.iter().all(PropertyValue::is_derived));
    }

    #[test]
    fn equivalent_classes_without_the_subject_are_irrelevant() {
        let axiom = Axiom::equivalent_classes([
            class("B").into(),
            ClassExpression::some(has_part(), class("C")),
        ]);
        assert!(translate(&class("A").into(), &axiom, &SignatureIndex::default()).is_none());
    }

    #[test]
    fn equivalent_classes_for_non_class_subject_is_empty() {
        let axiom = Axiom::equivalent_classes([
            class("A").into(),
            ClassExpression::some(has_part(), class("C")),
        ]);
        let subject: Entity = NamedIndividual::new(iri("A")).into();
        assert_eq!(
            translate(&subject, &axiom, &SignatureIndex::default()),
            Some(BTreeSet::new())
        );
    }

    #[test]
    fn annotation_iri_resolves_every_punned_entity() {
        let target = Iri::new(iri("T"));
        let axiom = Axiom::annotation_assertion(
            AnnotationProperty::new(vocab::RDFS_SEE_ALSO),
            Iri::new(iri("A")),
            target.clone(),
        );
        let index = SignatureIndex::from_entities([
            Class::new(target.clone()).into(),
            NamedIndividual::new(target.clone()).into(),
        ]);
        let values = translate(&class("A").into(), &axiom, &index).unwrap_or_default();
        let kinds: Vec<_> = values
            .iter()
            .filter_map(|v| match v {
                PropertyValue::Annotation { value, .. } => value.entity().map(Entity::entity_type),
                _ => None,
            })
            .collect();
        assert_eq!(kinds.len(), 2);
        assert!(kinds[0] < kinds[1]);
    }

    #[test]
    fn annotation_unresolved_iri_and_literal_give_one_value() {
        let see_also = Axiom::annotation_assertion(
            AnnotationProperty::new(vocab::RDFS_SEE_ALSO),
            Iri::new(iri("A")),
            Iri::new("http://elsewhere.org/doc"),
        );
        let label = Axiom::annotation_assertion(
            AnnotationProperty::new(vocab::RDFS_LABEL),
            Iri::new(iri("A")),
            Literal::lang_tagged("Alpha", "en"),
        );
        let index = SignatureIndex::default();
        for axiom in [see_also, label] {
            let values = translate(&class("A").into(), &axiom, &index).unwrap_or_default();
            assert_eq!(values.len(), 1);
            let Some(PropertyValue::Annotation { value, state, .. }) = values.first() else {
                panic!("expected an annotation value, got {values:?}");
            };
            assert!(value.entity().is_none());
            assert_eq!(*state, State::Asserted);
        }
    }

    #[test]
    fn annotation_on_other_subject_is_irrelevant() {
        let axiom = Axiom::annotation_assertion(
            AnnotationProperty::new(vocab::RDFS_LABEL),
            Iri::new(iri("B")),
            Literal::string("Beta"),
        );
        assert!(translate(&class("A").into(), &axiom, &SignatureIndex::default()).is_none());
    }

    #[test]
    fn property_assertions_on_the_subject_individual() {
        let a = NamedIndividual::new(iri("a"));
        let subject: Entity = a.clone().into();
        let index = SignatureIndex::default();
        let opa = Axiom::object_property_assertion(has_part(), a.clone(), NamedIndividual::new(iri("b")));
        assert!(matches!(
            translate(&subject, &opa, &index).unwrap_or_default().first(),
            Some(PropertyValue::Individual { state: State::Asserted, .. })
        ));
        let dpa = Axiom::data_property_assertion(
            DataProperty::new(iri("size")),
            a,
            Literal::typed("3", vocab::XSD_INTEGER),
        );
        assert!(matches!(
            translate(&subject, &dpa, &index).unwrap_or_default().first(),
            Some(PropertyValue::Literal { state: State::Asserted, .. })
        ));
    }

    #[test]
    fn object_property_assertion_needs_named_terms() {
        let a = NamedIndividual::new(iri("a"));
        let subject: Entity = a.clone().into();
        let inverse = Axiom::ObjectPropertyAssertion {
            property: ObjectPropertyExpression::Inverse(has_part()),
            subject: a.clone().into(),
            object: NamedIndividual::new(iri("b")).into(),
        };
        let anonymous = Axiom::ObjectPropertyAssertion {
            property: has_part().into(),
            subject: a.into(),
            object: Individual::Anonymous("_:b0".into()),
        };
        let index = SignatureIndex::default();
        assert!(translate(&subject, &inverse, &index).is_none());
        assert!(translate(&subject, &anonymous, &index).is_none());
    }

    #[test]
    fn class_assertion_uses_the_initial_state() {
        let a = NamedIndividual::new(iri("a"));
        let subject: Entity = a.clone().into();
        let axiom = Axiom::class_assertion(ClassExpression::some(has_part(), class("B")), a);
        let index = SignatureIndex::default();
        let values = AxiomTranslator::new(&subject, State::Derived, &index, &ShortFormRenderer)
            .translate(&axiom)
            .unwrap_or_default();
        assert!(values.iter().all(PropertyValue::is_derived));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn unsupported_axioms_are_irrelevant() {
        let axiom = Axiom::declaration(class("A"));
        assert!(translate(&class("A").into(), &axiom, &SignatureIndex::default()).is_none());
    }
}
