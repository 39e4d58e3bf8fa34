//! Relevance validator: an axiom says nothing about entities outside its
//! vocabulary.

use protege_frame::{AxiomPropertyValueTranslator, ContextRenderer, State};
use protege_owl::{Class, EntitiesInSignatureIndex, Entity, NamedIndividual, Ontology};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "frame/relevance";
const OUTSIDER: &str = "urn:protege:conformance:outsider";

/// Checks that every axiom is irrelevant to entities it does not mention.
pub fn validate<R, I>(
    ontology: &Ontology,
    translator: &AxiomPropertyValueTranslator<R, I>,
) -> ConformanceReport
where
    R: ContextRenderer,
    I: EntitiesInSignatureIndex,
{
    let outsiders = [
        Entity::from(Class::new(OUTSIDER)),
        Entity::from(NamedIndividual::new(OUTSIDER)),
    ];
    let mut violations = Vec::new();
    for axiom in ontology.axioms() {
        for outsider in &outsiders {
            for state in [State::Asserted, State::Derived] {
                let values = translator.property_values(outsider, axiom, state);
                if !values.is_empty() {
                    violations.push(format!(
                        "{axiom} yields {} value(s) for unrelated {outsider}",
                        values.len()
                    ));
                }
            }
        }
    }
    TestResult::from_violations(
        VALIDATOR,
        format!("{} axiom(s) ignore unrelated subjects", ontology.axiom_count()),
        "Axioms that produce values for unrelated subjects",
        violations,
    )
    .into()
}
