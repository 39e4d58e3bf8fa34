//! Entity lookup by IRI.

use std::collections::{BTreeSet, HashMap};

use crate::entity::Entity;
use crate::iri::Iri;
use crate::ontology::Ontology;

/// Resolves an IRI to the entities in a signature that carry it.
///
/// More than one entity may share an IRI (punning), e.g. a class and a
/// named individual.
pub trait EntitiesInSignatureIndex {
    /// Returns the entities with IRI `iri`, in entity order. Empty when the
    /// IRI names nothing.
    fn entities_in_signature(&self, iri: &Iri) -> BTreeSet<Entity>;
}

impl<T: EntitiesInSignatureIndex + ?Sized> EntitiesInSignatureIndex for &T {
    fn entities_in_signature(&self, iri: &Iri) -> BTreeSet<Entity> {
        (**self).entities_in_signature(iri)
    }
}

/// A precomputed [`EntitiesInSignatureIndex`] over one ontology.
#[derive(Debug, Clone, Default)]
pub struct SignatureIndex {
    by_iri: HashMap<Iri, BTreeSet<Entity>>,
}

impl SignatureIndex {
    /// Indexes the signature of `ontology`.
    #[must_use]
    pub fn new(ontology: &Ontology) -> Self {
        Self::from_entities(ontology.signature())
    }

    /// Indexes an explicit set of entities.
    #[must_use]
    pub fn from_entities(entities: impl IntoIterator<Item = Entity>) -> Self {
        let mut by_iri: HashMap<Iri, BTreeSet<Entity>> = HashMap::new();
        for entity in entities {
            by_iri.entry(entity.iri().clone()).or_default().insert(entity);
        }
        Self { by_iri }
    }

    /// Returns the number of distinct IRIs indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_iri.len()
    }

    /// Returns `true` if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_iri.is_empty()
    }
}

impl EntitiesInSignatureIndex for SignatureIndex {
    fn entities_in_signature(&self, iri: &Iri) -> BTreeSet<Entity> {
        self.by_iri.get(iri).cloned().unwrap_or_default()
    }
}
