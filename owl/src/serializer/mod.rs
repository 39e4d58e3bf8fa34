//! Serializers for ontologies.
//!
//! - **Functional syntax** ([`functional`]): OWL 2 functional-style rendering,
//!   also backing the `Display` impls of axioms and expressions
//! - **JSON**: via [`Ontology::to_json_string`](crate::Ontology::to_json_string)
//!   when the `serde` feature is enabled

pub mod functional;
