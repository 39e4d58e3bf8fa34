//! Internationalized Resource Identifiers.
//!
//! Every named ontology element is identified by an [`Iri`]. IRIs are
//! compared by their full string form; no normalization is applied.

use std::fmt;
use std::sync::Arc;

/// An immutable, cheaply cloneable IRI.
///
/// # Example
///
/// ```
/// use protege_owl::Iri;
///
/// let iri = Iri::new("http://example.org/pizza#Margherita");
/// assert_eq!(iri.short_form(), "Margherita");
/// assert_eq!(iri.as_str(), "http://example.org/pizza#Margherita");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct Iri(Arc<str>);

impl Iri {
    /// Creates an IRI from its full string form.
    #[must_use]
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    /// Returns the full string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the fragment after the last `#` or `/`.
    ///
    /// Falls back to the full IRI when the remainder would be empty
    /// (e.g. `http://example.org/`).
    #[must_use]
    pub fn short_form(&self) -> &str {
        match self.0.rfind(['#', '/']) {
            Some(idx) if idx + 1 < self.0.len() => &self.0[idx + 1..],
            _ => &self.0,
        }
    }

    /// Returns the namespace part, i.e. everything up to and including the
    /// last `#` or `/`. Empty when the IRI has neither.
    #[must_use]
    pub fn namespace(&self) -> &str {
        match self.0.rfind(['#', '/']) {
            Some(idx) => &self.0[..=idx],
            None => "",
        }
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Iri {
    fn from(iri: &str) -> Self {
        Self::new(iri)
    }
}

impl From<String> for Iri {
    fn from(iri: String) -> Self {
        Self(Arc::from(iri))
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0.as_ref().to_owned()
    }
}
