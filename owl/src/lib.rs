//! OWL 2 structural model encoded as typed Rust data.
//!
//! The `protege-owl` crate provides the ontology vocabulary the frame
//! translators work over: IRIs, the six kinds of named entity, literals,
//! class expressions, axioms and ontologies, together with an IRI to entity
//! signature index and an OWL 2 functional-syntax serializer.
//!
//! # Entry Point
//!
//! ```
//! use protege_owl::{Axiom, Class, ClassExpression, ObjectProperty, Ontology};
//!
//! let pizza = Class::new("http://ex.org/Pizza");
//! let topping = ObjectProperty::new("http://ex.org/hasTopping");
//! let cheese = Class::new("http://ex.org/Cheese");
//!
//! let mut ontology = Ontology::with_iri("http://ex.org/pizza");
//! ontology.add_axiom(Axiom::sub_class_of(pizza, ClassExpression::some(topping, cheese)));
//! assert_eq!(ontology.signature().len(), 3);
//! ```
//!
//! # Serialization
//!
//! ```
//! let ontology = protege_owl::Ontology::with_iri("http://ex.org/empty");
//! let functional = protege_owl::serializer::functional::to_functional(&ontology);
//! assert!(functional.starts_with("Ontology(<http://ex.org/empty>"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod annotation;
pub mod axiom;
pub mod entity;
pub mod expression;
pub mod index;
pub mod iri;
pub mod literal;
pub mod ontology;
pub mod serializer;
pub mod vocab;

pub use annotation::{AnnotationSubject, AnnotationValue};
pub use axiom::Axiom;
pub use entity::{
    AnnotationProperty, Class, DataProperty, Datatype, Entity, EntityType, NamedIndividual,
    ObjectProperty,
};
pub use expression::{ClassExpression, DataRange, Individual, ObjectPropertyExpression};
pub use index::{EntitiesInSignatureIndex, SignatureIndex};
pub use iri::Iri;
pub use literal::Literal;
pub use ontology::{Ontology, OntologyError};
