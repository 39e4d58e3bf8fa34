//! Rendered descriptors: entities, literals and annotation values paired
//! with the text a user sees for them.

use protege_owl::{AnnotationValue, Entity, Iri, Literal};

/// An entity together with its browser text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityData<E> {
    /// The entity.
    pub entity: E,
    /// Display label.
    pub browser_text: String,
}

impl<E> EntityData<E> {
    /// Pairs `entity` with `browser_text`.
    #[must_use]
    pub fn new(entity: E, browser_text: impl Into<String>) -> Self {
        Self {
            entity,
            browser_text: browser_text.into(),
        }
    }
}

impl<E: Clone + Into<Entity>> EntityData<E> {
    /// Erases the entity kind.
    #[must_use]
    pub fn to_entity_data(&self) -> EntityData<Entity> {
        EntityData::new(self.entity.clone().into(), self.browser_text.clone())
    }
}

/// A literal prepared for display. The browser text is the lexical form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiteralData {
    /// The literal.
    pub literal: Literal,
}

impl LiteralData {
    /// Returns the display text.
    #[must_use]
    pub fn browser_text(&self) -> &str {
        &self.literal.lexical
    }
}

impl From<Literal> for LiteralData {
    fn from(literal: Literal) -> Self {
        Self { literal }
    }
}

/// A rendered annotation value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationValueData {
    /// An IRI that resolved to a known entity.
    Entity(EntityData<Entity>),
    /// An IRI that names no entity in the signature.
    Iri {
        /// The IRI.
        iri: Iri,
        /// Display label.
        browser_text: String,
    },
    /// A literal.
    Literal(LiteralData),
    /// An anonymous individual.
    Anonymous(String),
}

impl AnnotationValueData {
    /// Returns the display text.
    #[must_use]
    pub fn browser_text(&self) -> &str {
        match self {
            AnnotationValueData::Entity(data) => &data.browser_text,
            AnnotationValueData::Iri { browser_text, .. } => browser_text,
            AnnotationValueData::Literal(lit) => lit.browser_text(),
            AnnotationValueData::Anonymous(node) => node,
        }
    }

    /// Returns the annotation value this descriptor stands for.
    #[must_use]
    pub fn to_annotation_value(&self) -> AnnotationValue {
        match self {
            AnnotationValueData::Entity(data) => AnnotationValue::Iri(data.entity.iri().clone()),
            AnnotationValueData::Iri { iri, .. } => AnnotationValue::Iri(iri.clone()),
            AnnotationValueData::Literal(lit) => AnnotationValue::Literal(lit.literal.clone()),
            AnnotationValueData::Anonymous(node) => AnnotationValue::Anonymous(node.clone()),
        }
    }

    /// Returns the named entity, when the value resolved to one.
    #[must_use]
    pub fn entity(&self) -> Option<&Entity> {
        match self {
            AnnotationValueData::Entity(data) => Some(&data.entity),
            _ => None,
        }
    }
}
