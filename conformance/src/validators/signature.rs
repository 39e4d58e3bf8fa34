//! Declaration validator: every entity used in an axiom is declared.
//!
//! Entities of the OWL, RDF, RDFS and XSD vocabularies are built in and
//! need no declaration.

use protege_owl::{vocab, Entity, Ontology};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/signature";

fn is_built_in(entity: &Entity) -> bool {
    let iri = entity.iri().as_str();
    [vocab::OWL, vocab::RDF, vocab::RDFS, vocab::XSD]
        .iter()
        .any(|ns| iri.starts_with(*ns))
}

/// Checks that the signature of `ontology` is declared.
pub fn validate(ontology: &Ontology) -> ConformanceReport {
    let declared = ontology.declared_entities();
    let signature = ontology.signature();
    let violations: Vec<String> = signature
        .iter()
        .filter(|entity| !declared.contains(entity) && !is_built_in(entity))
        .map(|entity| format!("{entity} is used but not declared"))
        .collect();
    TestResult::from_violations(
        VALIDATOR,
        format!("All {} signature entities are declared", signature.len()),
        "Undeclared entities in the signature",
        violations,
    )
    .into()
}
