//! Decomposition of class expressions into property values.

use std::collections::BTreeSet;

use protege_owl::{ClassExpression, DataRange};

use crate::renderer::ContextRenderer;
use crate::state::State;
use crate::value::PropertyValue;

/// Translates a single class expression into property values tagged with a
/// fixed [`State`].
///
/// Only restrictions over named terms have a property-value reading:
///
/// | Expression | Value |
/// |------------|-------|
/// | `ObjectSomeValuesFrom(R B)` | `Class(R, B)` |
/// | `ObjectHasValue(R b)` | `Individual(R, b)` |
/// | `DataSomeValuesFrom(R T)` | `Datatype(R, T)` |
/// | `DataHasValue(R l)` | `Literal(R, l)` |
///
/// Intersections are not split here; callers that want conjunct-wise
/// translation split first with [`ClassExpression::as_conjunct_set`].
pub struct ClassExpressionTranslator<'a, R: ?Sized> {
    state: State,
    renderer: &'a R,
}

impl<'a, R: ContextRenderer + ?Sized> ClassExpressionTranslator<'a, R> {
    /// Creates a translator that tags every value with `state`.
    pub fn new(state: State, renderer: &'a R) -> Self {
        Self { state, renderer }
    }

    /// Returns the values of `ce`, or `None` when it has no property-value
    /// reading.
    pub fn translate(&self, ce: &ClassExpression) -> Option<BTreeSet<PropertyValue>> {
        let value = match ce {
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                let (Some(property), Some(filler)) = (property.as_named(), filler.as_class())
                else {
                    return None;
                };
                PropertyValue::Class {
                    property: self.renderer.object_property_data(property),
                    value: self.renderer.class_data(filler),
                    state: self.state,
                }
            }
            ClassExpression::ObjectHasValue { property, value } => {
                let (Some(property), Some(value)) = (property.as_named(), value.as_named()) else {
                    return None;
                };
                PropertyValue::Individual {
                    property: self.renderer.object_property_data(property),
                    value: self.renderer.individual_data(value),
                    state: self.state,
                }
            }
            ClassExpression::DataSomeValuesFrom {
                property,
                range: DataRange::Datatype(datatype),
            } => PropertyValue::Datatype {
                property: self.renderer.data_property_data(property),
                value: self.renderer.datatype_data(datatype),
                state: self.state,
            },
            ClassExpression::DataHasValue { property, value } => PropertyValue::Literal {
                property: self.renderer.data_property_data(property),
                value: self.renderer.literal_data(value),
                state: self.state,
            },
            _ => return None,
        };
        Some(BTreeSet::from([value]))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::renderer::ShortFormRenderer;
    use protege_owl::{
        Class, DataProperty, Datatype, Individual, Literal, NamedIndividual, ObjectProperty,
        ObjectPropertyExpression, vocab,
    };

    fn translate(ce: &ClassExpression) -> Option<BTreeSet<PropertyValue>> {
        ClassExpressionTranslator::new(State::Asserted, &ShortFormRenderer).translate(ce)
    }

    fn r() -> ObjectProperty {
        ObjectProperty::new("http://ex.org/r")
    }

    #[test]
    fn existential_over_named_class_is_class_value() {
        let ce = ClassExpression::some(r(), Class::new("http://ex.org/B"));
        let values = translate(&ce).unwrap_or_default();
        assert_eq!(values.len(), 1);
        let Some(PropertyValue::Class { property, value, state }) = values.first() else {
            panic!("expected a class value, got {values:?}");
        };
        assert_eq!(property.browser_text, "r");
        assert_eq!(value.browser_text, "B");
        assert_eq!(*state, State::Asserted);
    }

    #[test]
    fn existential_over_anonymous_filler_has_no_reading() {
        let inner = ClassExpression::some(r(), Class::new("http://ex.org/B"));
        assert!(translate(&ClassExpression::some(r(), inner)).is_none());
    }

    #[test]
    fn inverse_property_has_no_reading() {
        let ce = ClassExpression::ObjectSomeValuesFrom {
            property: ObjectPropertyExpression::Inverse(r()),
            filler: Box::new(Class::new("http://ex.org/B").into()),
        };
        assert!(translate(&ce).is_none());
    }

    #[test]
    fn has_value_requires_named_individual() {
        let named = ClassExpression::has_value(r(), NamedIndividual::new("http://ex.org/b"));
        assert!(matches!(
            translate(&named).unwrap_or_default().first(),
            Some(PropertyValue::Individual { .. })
        ));
        let anonymous = ClassExpression::ObjectHasValue {
            property: r().into(),
            value: Individual::Anonymous("b0".into()),
        };
        assert!(translate(&anonymous).is_none());
    }

    #[test]
    fn data_restrictions_translate() {
        let d = DataProperty::new("http://ex.org/age");
        let some = ClassExpression::data_some(d.clone(), Datatype::new(vocab::XSD_INTEGER));
        assert!(matches!(
            translate(&some).unwrap_or_default().first(),
            Some(PropertyValue::Datatype { .. })
        ));
        let has = ClassExpression::data_has_value(d.clone(), Literal::typed("3", vocab::XSD_INTEGER));
        assert!(matches!(
            translate(&has).unwrap_or_default().first(),
            Some(PropertyValue::Literal { .. })
        ));
        let one_of = ClassExpression::DataSomeValuesFrom {
            property: d,
            range: DataRange::DataOneOf(vec![Literal::string("x")]),
        };
        assert!(translate(&one_of).is_none());
    }

    #[test]
    fn named_classes_and_intersections_have_no_reading() {
        let b: ClassExpression = Class::new("http://ex.org/B").into();
        assert!(translate(&b).is_none());
        let conj = ClassExpression::and([b, ClassExpression::some(r(), Class::new("http://ex.org/C"))]);
        assert!(translate(&conj).is_none());
    }

    #[test]
    fn state_is_applied_to_every_value() {
        let ce = ClassExpression::some(r(), Class::new("http://ex.org/B"));
        let values = ClassExpressionTranslator::new(State::Derived, &ShortFormRenderer)
            .translate(&ce)
            .unwrap_or_default();
        assert!(values.iter().all(PropertyValue::is_derived));
    }
}
