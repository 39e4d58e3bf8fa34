//! Named ontology entities.
//!
//! OWL 2 distinguishes six kinds of named entity. Each kind is a distinct
//! newtype over [`Iri`] so that, for example, an object property can never be
//! passed where a data property is expected. [`Entity`] is the tagged union
//! over all six kinds.

use std::fmt;

use crate::iri::Iri;

/// The kind of a named entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityType {
    /// `owl:Class`.
    Class,
    /// `owl:ObjectProperty`.
    ObjectProperty,
    /// `owl:DatatypeProperty`.
    DataProperty,
    /// `owl:AnnotationProperty`.
    AnnotationProperty,
    /// `owl:NamedIndividual`.
    NamedIndividual,
    /// `rdfs:Datatype`.
    Datatype,
}

impl EntityType {
    /// All entity kinds, in their canonical order.
    pub const ALL: [EntityType; 6] = [
        EntityType::Class,
        EntityType::ObjectProperty,
        EntityType::DataProperty,
        EntityType::AnnotationProperty,
        EntityType::NamedIndividual,
        EntityType::Datatype,
    ];

    /// Returns the OWL 2 functional-syntax keyword for this kind.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            EntityType::Class => "Class",
            EntityType::ObjectProperty => "ObjectProperty",
            EntityType::DataProperty => "DataProperty",
            EntityType::AnnotationProperty => "AnnotationProperty",
            EntityType::NamedIndividual => "NamedIndividual",
            EntityType::Datatype => "Datatype",
        }
    }

    /// Builds an entity of this kind with the given IRI.
    #[must_use]
    pub fn entity(self, iri: impl Into<Iri>) -> Entity {
        let iri = iri.into();
        match self {
            EntityType::Class => Entity::Class(Class(iri)),
            EntityType::ObjectProperty => Entity::ObjectProperty(ObjectProperty(iri)),
            EntityType::DataProperty => Entity::DataProperty(DataProperty(iri)),
            EntityType::AnnotationProperty => {
                Entity::AnnotationProperty(AnnotationProperty(iri))
            }
            EntityType::NamedIndividual => Entity::NamedIndividual(NamedIndividual(iri)),
            EntityType::Datatype => Entity::Datatype(Datatype(iri)),
        }
    }
}

macro_rules! named_entity {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(pub Iri);

        impl $name {
            #[doc = concat!("Creates a `", stringify!($name), "` with the given IRI.")]
            #[must_use]
            pub fn new(iri: impl Into<Iri>) -> Self {
                Self(iri.into())
            }

            /// Returns the IRI of this entity.
            #[must_use]
            pub fn iri(&self) -> &Iri {
                &self.0
            }
        }

        impl From<$name> for Entity {
            fn from(entity: $name) -> Self {
                Entity::$name(entity)
            }
        }

        impl PartialEq<Entity> for $name {
            fn eq(&self, other: &Entity) -> bool {
                matches!(other, Entity::$name(e) if e == self)
            }
        }
    };
}

named_entity!(
    /// A named class.
    Class
);
named_entity!(
    /// A named object property.
    ObjectProperty
);
named_entity!(
    /// A named data property.
    DataProperty
);
named_entity!(
    /// A named annotation property.
    AnnotationProperty
);
named_entity!(
    /// A named individual.
    NamedIndividual
);
named_entity!(
    /// A named datatype.
    Datatype
);

/// A named ontology entity of any kind.
///
/// Entities order first by kind (in [`EntityType::ALL`] order), then by IRI.
/// This is the stable ordering used when several entities share one IRI.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    /// A class.
    Class(Class),
    /// An object property.
    ObjectProperty(ObjectProperty),
    /// A data property.
    DataProperty(DataProperty),
    /// An annotation property.
    AnnotationProperty(AnnotationProperty),
    /// A named individual.
    NamedIndividual(NamedIndividual),
    /// A datatype.
    Datatype(Datatype),
}

impl Entity {
    /// Returns the IRI of this entity.
    #[must_use]
    pub fn iri(&self) -> &Iri {
        match self {
            Entity::Class(e) => &e.0,
            Entity::ObjectProperty(e) => &e.0,
            Entity::DataProperty(e) => &e.0,
            Entity::AnnotationProperty(e) => &e.0,
            Entity::NamedIndividual(e) => &e.0,
            Entity::Datatype(e) => &e.0,
        }
    }

    /// Returns the kind of this entity.
    #[must_use]
    pub fn entity_type(&self) -> EntityType {
        match self {
            Entity::Class(_) => EntityType::Class,
            Entity::ObjectProperty(_) => EntityType::ObjectProperty,
            Entity::DataProperty(_) => EntityType::DataProperty,
            Entity::AnnotationProperty(_) => EntityType::AnnotationProperty,
            Entity::NamedIndividual(_) => EntityType::NamedIndividual,
            Entity::Datatype(_) => EntityType::Datatype,
        }
    }

    /// Returns the class if this entity is one.
    #[must_use]
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Entity::Class(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the named individual if this entity is one.
    #[must_use]
    pub fn as_named_individual(&self) -> Option<&NamedIndividual> {
        match self {
            Entity::NamedIndividual(i) => Some(i),
            _ => None,
        }
    }

    /// Returns `true` if this entity is a class.
    #[must_use]
    pub fn is_class(&self) -> bool {
        matches!(self, Entity::Class(_))
    }

    /// Returns `true` if this entity is a named individual.
    #[must_use]
    pub fn is_named_individual(&self) -> bool {
        matches!(self, Entity::NamedIndividual(_))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(<{}>)", self.entity_type().keyword(), self.iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_order_by_kind_then_iri() {
        let a = Entity::from(Class::new("http://ex.org/z"));
        let b = Entity::from(NamedIndividual::new("http://ex.org/a"));
        let c = Entity::from(NamedIndividual::new("http://ex.org/b"));
        let mut all = vec![c.clone(), b.clone(), a.clone()];
        all.sort();
        assert_eq!(all, vec![a, b, c]);
    }

    #[test]
    fn typed_entity_compares_with_entity() {
        let class = Class::new("http://ex.org/A");
        assert!(class == Entity::Class(class.clone()));
        assert!(class != EntityType::NamedIndividual.entity("http://ex.org/A"));
    }

    #[test]
    fn entity_type_round_trips_through_builder() {
        for kind in EntityType::ALL {
            assert_eq!(kind.entity("http://ex.org/x").entity_type(), kind);
        }
    }

    #[test]
    fn display_uses_functional_keyword() {
        let e = Entity::from(DataProperty::new("http://ex.org/age"));
        assert_eq!(e.to_string(), "DataProperty(<http://ex.org/age>)");
    }
}
