//! Provenance and edit modes of property values.

/// Whether a property value is asserted directly by an editable axiom or
/// derived as a consequence of other axioms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
    /// Comes directly from exactly one reconstructable axiom.
    #[default]
    Asserted,
    /// Display only; never translates back into axioms.
    Derived,
}

impl State {
    /// Returns the lower-case name used in reports and CLI output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            State::Asserted => "asserted",
            State::Derived => "derived",
        }
    }
}

/// How property values are turned back into axioms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Emit exactly the axiom the value stands for.
    #[default]
    Strict,
    /// Also emit declarations for the property and every named value
    /// entity, so the axioms can be added to an ontology that does not
    /// declare them yet.
    Lax,
}

impl Mode {
    /// Both modes.
    pub const ALL: [Mode; 2] = [Mode::Strict, Mode::Lax];
}
