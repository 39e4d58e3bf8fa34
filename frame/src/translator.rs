//! The two-way translator between axioms and property values.

use std::collections::BTreeSet;

use protege_owl::{Axiom, EntitiesInSignatureIndex, Entity};

use crate::axiom_translator::AxiomTranslator;
use crate::renderer::ContextRenderer;
use crate::state::{Mode, State};
use crate::value::PropertyValue;
use crate::value_translator::PropertyValueTranslator;

/// Translates axioms into property values and back.
///
/// The two directions are not inverses of each other. Derived values are
/// read out of definitions but never written back as axioms, and axioms with
/// no property-value reading produce nothing.
///
/// ```
/// use protege_frame::{AxiomPropertyValueTranslator, Mode, ShortFormRenderer, State};
/// use protege_owl::{Axiom, Class, ClassExpression, Entity, ObjectProperty, SignatureIndex};
///
/// let a = Class::new("http://ex.org/A");
/// let axiom = Axiom::sub_class_of(
///     a.clone(),
///     ClassExpression::some(ObjectProperty::new("http://ex.org/r"), Class::new("http://ex.org/B")),
/// );
/// let index = SignatureIndex::default();
/// let translator = AxiomPropertyValueTranslator::new(ShortFormRenderer, &index);
/// let subject = Entity::from(a);
///
/// let values = translator.property_values(&subject, &axiom, State::Asserted);
/// assert_eq!(values.len(), 1);
/// for value in &values {
///     assert!(translator.axioms(&subject, value, Mode::Strict).contains(&axiom));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AxiomPropertyValueTranslator<R, I> {
    renderer: R,
    index: I,
}

impl<R, I> AxiomPropertyValueTranslator<R, I>
where
    R: ContextRenderer,
    I: EntitiesInSignatureIndex,
{
    /// Creates a translator over `renderer` and `index`.
    pub fn new(renderer: R, index: I) -> Self {
        Self { renderer, index }
    }

    /// Returns the property values `axiom` states about `subject`, tagged
    /// with `initial_state` where the axiom does not fix the state itself.
    /// Empty when the axiom is irrelevant to the subject.
    pub fn property_values(
        &self,
        subject: &Entity,
        axiom: &Axiom,
        initial_state: State,
    ) -> BTreeSet<PropertyValue> {
        AxiomTranslator::new(subject, initial_state, &self.index, &self.renderer)
            .translate(axiom)
            .unwrap_or_default()
    }

    /// Returns the axioms that assert `value` about `subject`. Derived
    /// values yield nothing in every mode.
    pub fn axioms(&self, subject: &Entity, value: &PropertyValue, mode: Mode) -> BTreeSet<Axiom> {
        if value.is_derived() {
            return BTreeSet::new();
        }
        PropertyValueTranslator::new(subject, mode).translate(value)
    }

    /// Returns the renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Returns the signature index.
    pub fn index(&self) -> &I {
        &self.index
    }
}
