//! Annotation subjects and values.

use crate::iri::Iri;
use crate::literal::Literal;

/// The subject of an annotation assertion.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationSubject {
    /// An IRI, typically that of an entity.
    Iri(Iri),
    /// An anonymous individual.
    Anonymous(String),
}

impl AnnotationSubject {
    /// Returns the IRI, or `None` for an anonymous subject.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            AnnotationSubject::Iri(iri) => Some(iri),
            AnnotationSubject::Anonymous(_) => None,
        }
    }
}

impl From<Iri> for AnnotationSubject {
    fn from(iri: Iri) -> Self {
        AnnotationSubject::Iri(iri)
    }
}

/// The value of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnotationValue {
    /// An IRI.
    Iri(Iri),
    /// A literal.
    Literal(Literal),
    /// An anonymous individual.
    Anonymous(String),
}

impl AnnotationValue {
    /// Returns the IRI if the value is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            AnnotationValue::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if the value is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            AnnotationValue::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        AnnotationValue::Literal(literal)
    }
}

impl From<Iri> for AnnotationValue {
    fn from(iri: Iri) -> Self {
        AnnotationValue::Iri(iri)
    }
}
