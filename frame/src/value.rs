//! Property values: one display and edit oriented fact about an entity.

use std::fmt;

use protege_owl::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, Iri, NamedIndividual,
    ObjectProperty,
};

use crate::data::{AnnotationValueData, EntityData, LiteralData};
use crate::state::State;

/// A property paired with a value, tagged with its [`State`].
///
/// | Variant | Property | Value | Typical source |
/// |---------|----------|-------|----------------|
/// | `Class` | object property | class | `SubClassOf(A ObjectSomeValuesFrom(R B))` |
/// | `Individual` | object property | named individual | `ObjectPropertyAssertion(R a b)` |
/// | `Datatype` | data property | datatype | `SubClassOf(A DataSomeValuesFrom(R T))` |
/// | `Literal` | data property | literal | `DataPropertyAssertion(R a l)` |
/// | `Annotation` | annotation property | IRI, entity or literal | `AnnotationAssertion(P A v)` |
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyValue {
    /// An object property with a class value.
    Class {
        /// Rendered property.
        property: EntityData<ObjectProperty>,
        /// Rendered class.
        value: EntityData<Class>,
        /// Provenance.
        state: State,
    },
    /// An object property with an individual value.
    Individual {
        /// Rendered property.
        property: EntityData<ObjectProperty>,
        /// Rendered individual.
        value: EntityData<NamedIndividual>,
        /// Provenance.
        state: State,
    },
    /// A data property with a datatype value.
    Datatype {
        /// Rendered property.
        property: EntityData<DataProperty>,
        /// Rendered datatype.
        value: EntityData<Datatype>,
        /// Provenance.
        state: State,
    },
    /// A data property with a literal value.
    Literal {
        /// Rendered property.
        property: EntityData<DataProperty>,
        /// Rendered literal.
        value: LiteralData,
        /// Provenance.
        state: State,
    },
    /// An annotation property with its value.
    Annotation {
        /// Rendered property.
        property: EntityData<AnnotationProperty>,
        /// Rendered value.
        value: AnnotationValueData,
        /// Provenance.
        state: State,
    },
}

impl PropertyValue {
    /// Returns the provenance of this value.
    #[must_use]
    pub fn state(&self) -> State {
        match self {
            PropertyValue::Class { state, .. }
            | PropertyValue::Individual { state, .. }
            | PropertyValue::Datatype { state, .. }
            | PropertyValue::Literal { state, .. }
            | PropertyValue::Annotation { state, .. } => *state,
        }
    }

    /// Returns `true` if this value is derived.
    #[must_use]
    pub fn is_derived(&self) -> bool {
        self.state() == State::Derived
    }

    /// Returns a copy of this value with a different provenance.
    #[must_use]
    pub fn with_state(&self, new_state: State) -> Self {
        let mut copy = self.clone();
        match &mut copy {
            PropertyValue::Class { state, .. }
            | PropertyValue::Individual { state, .. }
            | PropertyValue::Datatype { state, .. }
            | PropertyValue::Literal { state, .. }
            | PropertyValue::Annotation { state, .. } => *state = new_state,
        }
        copy
    }

    /// Returns `true` if both values state the same fact, whatever their
    /// provenance.
    #[must_use]
    pub fn same_fact(&self, other: &PropertyValue) -> bool {
        self.with_state(State::Asserted) == other.with_state(State::Asserted)
    }

    /// Returns the property as an untyped entity.
    #[must_use]
    pub fn property(&self) -> Entity {
        match self {
            PropertyValue::Class { property, .. } | PropertyValue::Individual { property, .. } => {
                property.entity.clone().into()
            }
            PropertyValue::Datatype { property, .. } | PropertyValue::Literal { property, .. } => {
                property.entity.clone().into()
            }
            PropertyValue::Annotation { property, .. } => property.entity.clone().into(),
        }
    }

    /// Returns the IRI of the property.
    #[must_use]
    pub fn property_iri(&self) -> &Iri {
        match self {
            PropertyValue::Class { property, .. } | PropertyValue::Individual { property, .. } => {
                property.entity.iri()
            }
            PropertyValue::Datatype { property, .. } | PropertyValue::Literal { property, .. } => {
                property.entity.iri()
            }
            PropertyValue::Annotation { property, .. } => property.entity.iri(),
        }
    }

    /// Returns the browser text of the property.
    #[must_use]
    pub fn property_browser_text(&self) -> &str {
        match self {
            PropertyValue::Class { property, .. } | PropertyValue::Individual { property, .. } => {
                &property.browser_text
            }
            PropertyValue::Datatype { property, .. } | PropertyValue::Literal { property, .. } => {
                &property.browser_text
            }
            PropertyValue::Annotation { property, .. } => &property.browser_text,
        }
    }

    /// Returns the browser text of the value.
    #[must_use]
    pub fn value_browser_text(&self) -> &str {
        match self {
            PropertyValue::Class { value, .. } => &value.browser_text,
            PropertyValue::Individual { value, .. } => &value.browser_text,
            PropertyValue::Datatype { value, .. } => &value.browser_text,
            PropertyValue::Literal { value, .. } => value.browser_text(),
            PropertyValue::Annotation { value, .. } => value.browser_text(),
        }
    }

    /// Returns the variant name.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Class { .. } => "class",
            PropertyValue::Individual { .. } => "individual",
            PropertyValue::Datatype { .. } => "datatype",
            PropertyValue::Literal { .. } => "literal",
            PropertyValue::Annotation { .. } => "annotation",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}]",
            self.property_browser_text(),
            self.value_browser_text(),
            self.state().as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protege_owl::Literal;

    fn literal_value(state: State) -> PropertyValue {
        PropertyValue::Literal {
            property: EntityData::new(DataProperty::new("http://ex.org/age"), "age"),
            value: Literal::string("7").into(),
            state,
        }
    }

    #[test]
    fn with_state_only_changes_provenance() {
        let asserted = literal_value(State::Asserted);
        let derived = asserted.with_state(State::Derived);
        assert!(derived.is_derived());
        assert_ne!(asserted, derived);
        assert!(asserted.same_fact(&derived));
    }

    #[test]
    fn accessors_reach_property_and_value() {
        let v = literal_value(State::Asserted);
        assert_eq!(v.property_iri().as_str(), "http://ex.org/age");
        assert_eq!(v.property(), Entity::from(DataProperty::new("http://ex.org/age")));
        assert_eq!(v.to_string(), "age 7 [asserted]");
        assert_eq!(v.kind(), "literal");
    }
}
