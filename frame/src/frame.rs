//! Frames: every property value of one entity, gathered from an ontology.

use std::collections::BTreeSet;

use protege_owl::{Axiom, EntitiesInSignatureIndex, Entity, Ontology};

use crate::data::EntityData;
use crate::renderer::ContextRenderer;
use crate::state::{Mode, State};
use crate::translator::AxiomPropertyValueTranslator;
use crate::value::PropertyValue;

/// The property values of one entity, in value order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    /// The rendered subject.
    pub subject: EntityData<Entity>,
    /// Values about the subject. A derived value is left out when the same
    /// fact is also asserted.
    pub property_values: Vec<PropertyValue>,
}

impl Frame {
    /// Assembles the frame of `subject` from the axioms of `ontology`.
    pub fn build<R, I>(
        subject: &Entity,
        ontology: &Ontology,
        translator: &AxiomPropertyValueTranslator<R, I>,
    ) -> Self
    where
        R: ContextRenderer,
        I: EntitiesInSignatureIndex,
    {
        let mut values = BTreeSet::new();
        let mut relevant = 0usize;
        for axiom in ontology.referencing(subject.iri()) {
            let found = translator.property_values(subject, axiom, State::Asserted);
            if !found.is_empty() {
                relevant += 1;
            }
            values.extend(found);
        }
        let property_values: Vec<PropertyValue> = values
            .iter()
            .filter(|value| {
                !value.is_derived() || !values.contains(&value.with_state(State::Asserted))
            })
            .cloned()
            .collect();
        tracing::debug!(
            subject = %subject,
            axioms = relevant,
            values = property_values.len(),
            "built frame"
        );
        Self {
            subject: translator.renderer().entity_data(subject),
            property_values,
        }
    }

    /// Iterates over the asserted values.
    pub fn asserted(&self) -> impl Iterator<Item = &PropertyValue> {
        self.property_values.iter().filter(|v| !v.is_derived())
    }

    /// Iterates over the derived values.
    pub fn derived(&self) -> impl Iterator<Item = &PropertyValue> {
        self.property_values.iter().filter(|v| v.is_derived())
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.property_values.len()
    }

    /// Returns `true` if the frame has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.property_values.is_empty()
    }

    /// Returns the axioms asserting every value of the frame.
    pub fn to_axioms<R, I>(
        &self,
        translator: &AxiomPropertyValueTranslator<R, I>,
        mode: Mode,
    ) -> BTreeSet<Axiom>
    where
        R: ContextRenderer,
        I: EntitiesInSignatureIndex,
    {
        self.property_values
            .iter()
            .flat_map(|value| translator.axioms(&self.subject.entity, value, mode))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::ShortFormRenderer;
    use protege_owl::{Class, ClassExpression, ObjectProperty, SignatureIndex};

    fn some(filler: &str) -> ClassExpression {
        ClassExpression::some(
            ObjectProperty::new("http://ex.org/r"),
            Class::new(format!("http://ex.org/{filler}")),
        )
    }

    #[test]
    fn asserted_value_hides_its_derived_twin() {
        let a = Class::new("http://ex.org/A");
        let ontology: Ontology = [
            Axiom::sub_class_of(a.clone(), some("B")),
            Axiom::equivalent_classes([a.clone().into(), ClassExpression::and([some("B"), some("C")])]),
        ]
        .into_iter()
        .collect();
        let index = SignatureIndex::new(&ontology);
        let translator = AxiomPropertyValueTranslator::new(ShortFormRenderer, &index);
        let frame = Frame::build(&a.into(), &ontology, &translator);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.asserted().count(), 1);
        assert_eq!(frame.derived().count(), 1);
        assert_eq!(frame.subject.browser_text, "A");
    }

    #[test]
    fn frame_axioms_skip_derived_values() {
        let a = Class::new("http://ex.org/A");
        let asserted = Axiom::sub_class_of(a.clone(), some("B"));
        let ontology: Ontology = [
            asserted.clone(),
            Axiom::equivalent_classes([a.clone().into(), some("C")]),
        ]
        .into_iter()
        .collect();
        let translator = AxiomPropertyValueTranslator::new(ShortFormRenderer, SignatureIndex::new(&ontology));
        let frame = Frame::build(&a.into(), &ontology, &translator);
        assert_eq!(frame.to_axioms(&translator, Mode::Strict), BTreeSet::from([asserted]));
    }
}
