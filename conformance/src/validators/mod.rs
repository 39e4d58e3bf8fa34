//! Validators over a loaded ontology and its frame translator.

pub mod derived;
pub mod relevance;
pub mod round_trip;
pub mod signature;

use std::collections::BTreeSet;

use protege_owl::{Axiom, EntitiesInSignatureIndex, Entity};

/// The entities an axiom can be translated for: every signature entity
/// carrying one of its IRIs.
pub(crate) fn subjects_of<I>(axiom: &Axiom, index: &I) -> BTreeSet<Entity>
where
    I: EntitiesInSignatureIndex + ?Sized,
{
    axiom
        .iris()
        .iter()
        .flat_map(|iri| index.entities_in_signature(iri))
        .collect()
}
