//! Derived-value validator: derived values must never produce axioms.

use protege_frame::{AxiomPropertyValueTranslator, ContextRenderer, Mode, State};
use protege_owl::{EntitiesInSignatureIndex, Ontology};

use super::subjects_of;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "frame/derived";

/// Checks that no derived value translates back into axioms.
pub fn validate<R, I>(
    ontology: &Ontology,
    translator: &AxiomPropertyValueTranslator<R, I>,
) -> ConformanceReport
where
    R: ContextRenderer,
    I: EntitiesInSignatureIndex,
{
    let mut violations = Vec::new();
    let mut derived = 0usize;
    for axiom in ontology.axioms() {
        for subject in subjects_of(axiom, translator.index()) {
            for value in translator
                .property_values(&subject, axiom, State::Asserted)
                .iter()
                .filter(|v| v.is_derived())
            {
                derived += 1;
                for mode in Mode::ALL {
                    let back = translator.axioms(&subject, value, mode);
                    if !back.is_empty() {
                        violations.push(format!(
                            "derived value `{value}` of {subject} gives {} axiom(s) in {mode:?} mode",
                            back.len()
                        ));
                    }
                }
            }
        }
    }
    let mut report = ConformanceReport::new();
    if derived == 0 {
        report.push(TestResult::warn(
            VALIDATOR,
            "No derived values found; class definitions were not exercised",
        ));
    }
    report.push(TestResult::from_violations(
        VALIDATOR,
        format!("{derived} derived value(s) stay read-only"),
        "Derived values that translate into axioms",
        violations,
    ));
    report
}
