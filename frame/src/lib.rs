//! Frame translation between OWL axioms and property values.
//!
//! An entity's *frame* is the list of property values an editor shows for
//! it: the existential restrictions on a class, the property assertions on
//! an individual, the annotations on anything. This crate reads those values
//! out of axioms and writes edited values back as axioms.
//!
//! # Entry Point
//!
//! ```
//! use protege_frame::{AxiomPropertyValueTranslator, Frame, LabelRenderer, Mode};
//! use protege_owl::{Axiom, Class, ClassExpression, ObjectProperty, Ontology, SignatureIndex};
//!
//! let margherita = Class::new("http://ex.org/Margherita");
//! let topping = ObjectProperty::new("http://ex.org/hasTopping");
//! let mozzarella = Class::new("http://ex.org/Mozzarella");
//! let ontology: Ontology = [Axiom::sub_class_of(
//!     margherita.clone(),
//!     ClassExpression::some(topping, mozzarella),
//! )]
//! .into_iter()
//! .collect();
//!
//! let translator = AxiomPropertyValueTranslator::new(
//!     LabelRenderer::new(&ontology),
//!     SignatureIndex::new(&ontology),
//! );
//! let frame = Frame::build(&margherita.into(), &ontology, &translator);
//! assert_eq!(frame.property_values[0].to_string(), "hasTopping Mozzarella [asserted]");
//! assert_eq!(frame.to_axioms(&translator, Mode::Strict).len(), 1);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod axiom_translator;
pub mod class_expression;
pub mod data;
pub mod frame;
pub mod renderer;
pub mod state;
pub mod translator;
pub mod value;
pub mod value_translator;

pub use axiom_translator::AxiomTranslator;
pub use class_expression::ClassExpressionTranslator;
pub use data::{AnnotationValueData, EntityData, LiteralData};
pub use frame::Frame;
pub use renderer::{ContextRenderer, LabelRenderer, ShortFormRenderer};
pub use state::{Mode, State};
pub use translator::AxiomPropertyValueTranslator;
pub use value::PropertyValue;
pub use value_translator::PropertyValueTranslator;
