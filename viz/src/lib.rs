//! Entity graph edges, edge criteria and graph settings.
//!
//! The entity graph shows classes and individuals as nodes, joined by
//! subclass, instance and relationship edges computed from an ontology.
//! [`EntityGraphSettings`] decide which edges are drawn; an
//! [`EntityGraphSettingsRepository`] keeps them per project and per user.
//!
//! ```
//! use protege_owl::{Axiom, Class, Ontology};
//! use protege_viz::{edges, EdgeCriteria, EntityGraphFilter, EntityGraphSettings};
//!
//! let ontology: Ontology = [Axiom::sub_class_of(
//!     Class::new("http://ex.org/A"),
//!     Class::new("http://ex.org/B"),
//! )]
//! .into_iter()
//! .collect();
//! let settings = EntityGraphSettings {
//!     filters: vec![EntityGraphFilter {
//!         exclusion_criteria: EdgeCriteria::AnySubClassOf,
//!         ..EntityGraphFilter::default()
//!     }],
//!     rank_spacing: 1.0,
//! };
//! let edges = edges(&ontology);
//! assert_eq!(settings.filter_edges(&edges).count(), 0);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod criteria;
pub mod edge;
pub mod repository;
pub mod settings;

pub use criteria::{EdgeCriteria, MultiMatchType};
pub use edge::{edges, Edge};
pub use repository::{
    DocumentCollection, DocumentSettingsRepository, EntityGraphSettingsRepository,
    FileCollection, MemoryCollection, RepositoryError,
};
pub use settings::{
    EntityGraphFilter, EntityGraphSettings, ProjectId, ProjectUserEntityGraphSettings, UserId,
};
