//! Frame translation conformance suite.
//!
//! Runs the translation laws over every axiom of an ontology and reports
//! each violation.
//!
//! # Conformance Scope
//!
//! | Validator | Law |
//! |-----------|-----|
//! | `frame/round_trip` | asserted values translate back to an equivalent axiom in every mode |
//! | `frame/derived` | derived values translate back to nothing |
//! | `frame/relevance` | axioms yield nothing for entities they do not mention |
//! | `ontology/signature` | every non-built-in entity in the signature is declared |
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = protege_conformance::run_path(Path::new("pizza.json"), Some("en"))
//!     .expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::Path;

use anyhow::Context;
use protege_frame::{AxiomPropertyValueTranslator, ContextRenderer, LabelRenderer};
use protege_owl::{EntitiesInSignatureIndex, Ontology, SignatureIndex};

pub use report::{ConformanceReport, Severity, Summary, TestResult};

/// Runs all validators with `translator` and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Declarations of the signature
/// 2. Round trip of asserted values
/// 3. Derived values stay read-only
/// 4. Relevance to unrelated subjects
pub fn run_with<R, I>(
    ontology: &Ontology,
    translator: &AxiomPropertyValueTranslator<R, I>,
) -> ConformanceReport
where
    R: ContextRenderer,
    I: EntitiesInSignatureIndex,
{
    let mut report = ConformanceReport::new();
    report.extend(validators::signature::validate(ontology));
    report.extend(validators::round_trip::validate(ontology, translator));
    report.extend(validators::derived::validate(ontology, translator));
    report.extend(validators::relevance::validate(ontology, translator));
    report
}

/// Runs all validators with a label renderer preferring `language`.
pub fn run_all(ontology: &Ontology, language: Option<&str>) -> ConformanceReport {
    let translator = AxiomPropertyValueTranslator::new(
        LabelRenderer::with_language(ontology, language),
        SignatureIndex::new(ontology),
    );
    run_with(ontology, &translator)
}

/// Loads the ontology document at `path` and runs all validators on it.
///
/// # Errors
///
/// Returns an error if the document cannot be read or parsed.
pub fn run_path(path: &Path, language: Option<&str>) -> anyhow::Result<ConformanceReport> {
    let ontology = Ontology::from_path(path)
        .with_context(|| format!("loading ontology document {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        axioms = ontology.axiom_count(),
        "running conformance"
    );
    Ok(run_all(&ontology, language))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests_unit {
    use super::*;
    use protege_owl::{Axiom, Class, ClassExpression, ObjectProperty};

    const PIZZA: &str = include_str!("../../owl/tests/fixtures/pizza.json");

    fn pizza() -> Ontology {
        match Ontology::from_json_str(PIZZA) {
            Ok(ontology) => ontology,
            Err(e) => panic!("pizza fixture must parse: {e}"),
        }
    }

    #[test]
    fn pizza_fixture_conforms() {
        let report = run_all(&pizza(), Some("en"));
        let failures: Vec<_> = report.failures().collect();
        assert!(
            failures.is_empty(),
            "conformance failures: {:#?}",
            failures
        );
        assert_eq!(report.summary().warnings, 0);
    }

    #[test]
    fn undeclared_entities_fail_the_signature_check() {
        let ontology: Ontology = [Axiom::sub_class_of(
            Class::new("http://ex.org/A"),
            ClassExpression::some(
                ObjectProperty::new("http://ex.org/r"),
                Class::new("http://ex.org/B"),
            ),
        )]
        .into_iter()
        .collect();
        let report = validators::signature::validate(&ontology);
        let failure = report.failures().next();
        assert_eq!(failure.map(|r| r.details.len()), Some(3));
    }

    #[test]
    fn ontology_without_definitions_warns() {
        let report = validators::derived::validate(
            &Ontology::new(),
            &AxiomPropertyValueTranslator::new(
                protege_frame::ShortFormRenderer,
                SignatureIndex::default(),
            ),
        );
        assert_eq!(report.summary().warnings, 1);
        assert!(report.all_passed());
    }

    #[test]
    fn report_serializes_for_machine_output() {
        let report = run_all(&pizza(), None);
        let json = serde_json::to_value(&report).unwrap_or_default();
        assert_eq!(json["results"][0]["validator"], "ontology/signature");
        assert_eq!(json["results"][0]["severity"], "pass");
    }
}
