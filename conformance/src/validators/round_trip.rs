//! Round-trip validator.
//!
//! Every asserted value read out of an axiom must translate back, in every
//! mode, to a set containing an axiom logically equivalent to the source.

use protege_frame::{AxiomPropertyValueTranslator, ContextRenderer, Mode, State};
use protege_owl::{EntitiesInSignatureIndex, Ontology};

use super::subjects_of;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "frame/round_trip";

/// Checks that asserted values reconstruct their source axioms.
pub fn validate<R, I>(
    ontology: &Ontology,
    translator: &AxiomPropertyValueTranslator<R, I>,
) -> ConformanceReport
where
    R: ContextRenderer,
    I: EntitiesInSignatureIndex,
{
    let mut violations = Vec::new();
    let mut checked = 0usize;
    for axiom in ontology.axioms() {
        for subject in subjects_of(axiom, translator.index()) {
            let values = translator.property_values(&subject, axiom, State::Asserted);
            for value in values.iter().filter(|v| !v.is_derived()) {
                checked += 1;
                for mode in Mode::ALL {
                    let back = translator.axioms(&subject, value, mode);
                    if !back.iter().any(|b| b.is_equivalent_to(axiom)) {
                        violations.push(format!(
                            "{axiom} for {subject}: value `{value}` gives {} axiom(s) in {mode:?} mode, none equivalent",
                            back.len()
                        ));
                    }
                }
            }
        }
    }
    tracing::debug!(checked, violations = violations.len(), "round trip checked");
    TestResult::from_violations(
        VALIDATOR,
        format!("{checked} asserted value(s) translate back to their axioms"),
        "Asserted values that do not reconstruct their axiom",
        violations,
    )
    .into()
}
