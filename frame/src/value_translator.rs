//! Reconstruction of the axioms that assert a property value.

use std::collections::BTreeSet;

use protege_owl::{Axiom, ClassExpression, Entity, Individual};

use crate::state::Mode;
use crate::value::PropertyValue;

/// Turns property values about one subject back into axioms.
///
/// | Value | Class subject `A` | Individual subject `a` |
/// |-------|-------------------|------------------------|
/// | `Class(R, B)` | `SubClassOf(A ObjectSomeValuesFrom(R B))` | `ClassAssertion(ObjectSomeValuesFrom(R B) a)` |
/// | `Individual(R, b)` | `SubClassOf(A ObjectHasValue(R b))` | `ObjectPropertyAssertion(R a b)` |
/// | `Datatype(R, T)` | `SubClassOf(A DataSomeValuesFrom(R T))` | `ClassAssertion(DataSomeValuesFrom(R T) a)` |
/// | `Literal(R, l)` | `SubClassOf(A DataHasValue(R l))` | `DataPropertyAssertion(R a l)` |
/// | `Annotation(P, v)` | `AnnotationAssertion(P A v)` | `AnnotationAssertion(P a v)` |
///
/// Property and datatype subjects only carry annotation values. The
/// translator does not look at the value's [`State`](crate::State); the
/// facade filters derived values out before calling it.
pub struct PropertyValueTranslator<'a> {
    subject: &'a Entity,
    mode: Mode,
}

impl<'a> PropertyValueTranslator<'a> {
    /// Creates a translator for values about `subject`.
    #[must_use]
    pub fn new(subject: &'a Entity, mode: Mode) -> Self {
        Self { subject, mode }
    }

    /// Returns the axioms asserting `value` about the subject. Empty when
    /// the value has no axiom reading for this kind of subject.
    #[must_use]
    pub fn translate(&self, value: &PropertyValue) -> BTreeSet<Axiom> {
        let Some(axiom) = self.asserting_axiom(value) else {
            return BTreeSet::new();
        };
        let mut axioms = BTreeSet::from([axiom]);
        if self.mode == Mode::Lax {
            axioms.extend(referenced_entities(value).into_iter().map(Axiom::declaration));
        }
        axioms
    }

    fn asserting_axiom(&self, value: &PropertyValue) -> Option<Axiom> {
        if let PropertyValue::Annotation {
            property, value, ..
        } = value
        {
            return Some(Axiom::annotation_assertion(
                property.entity.clone(),
                self.subject.iri().clone(),
                value.to_annotation_value(),
            ));
        }
        let restriction = match value {
            PropertyValue::Class {
                property, value, ..
            } => ClassExpression::some(property.entity.clone(), value.entity.clone()),
            PropertyValue::Individual {
                property, value, ..
            } => ClassExpression::has_value(property.entity.clone(), value.entity.clone()),
            PropertyValue::Datatype {
                property, value, ..
            } => ClassExpression::data_some(property.entity.clone(), value.entity.clone()),
            PropertyValue::Literal {
                property, value, ..
            } => ClassExpression::data_has_value(property.entity.clone(), value.literal.clone()),
            PropertyValue::Annotation { .. } => return None,
        };
        match self.subject {
            Entity::Class(class) => Some(Axiom::sub_class_of(class.clone(), restriction)),
            Entity::NamedIndividual(individual) => {
                Some(individual_axiom(individual.clone().into(), restriction))
            }
            _ => None,
        }
    }
}

// Has-value restrictions on an individual are written as property
// assertions; everything else stays a class assertion.
fn individual_axiom(individual: Individual, restriction: ClassExpression) -> Axiom {
    match restriction {
        ClassExpression::ObjectHasValue { property, value } => Axiom::ObjectPropertyAssertion {
            property,
            subject: individual,
            object: value,
        },
        ClassExpression::DataHasValue { property, value } => {
            Axiom::data_property_assertion(property, individual, value)
        }
        other => Axiom::class_assertion(other, individual),
    }
}

fn referenced_entities(value: &PropertyValue) -> Vec<Entity> {
    match value {
        PropertyValue::Class {
            property, value, ..
        } => vec![property.entity.clone().into(), value.entity.clone().into()],
        PropertyValue::Individual {
            property, value, ..
        } => vec![property.entity.clone().into(), value.entity.clone().into()],
        PropertyValue::Datatype {
            property, value, ..
        } => vec![property.entity.clone().into(), value.entity.clone().into()],
        PropertyValue::Literal { property, .. } => vec![property.entity.clone().into()],
        PropertyValue::Annotation {
            property, value, ..
        } => {
            let mut entities = vec![property.entity.clone().into()];
            entities.extend(value.entity().cloned());
            entities
        }
    }
}
