//! Ontologies: ordered axiom sets with JSON document I/O.

use std::collections::BTreeSet;
#[cfg(feature = "serde")]
use std::path::Path;
use std::path::PathBuf;

use crate::axiom::Axiom;
use crate::entity::Entity;
use crate::iri::Iri;

/// Errors raised while loading or storing an ontology document.
#[derive(Debug, thiserror::Error)]
pub enum OntologyError {
    /// The document could not be read or written.
    #[error("cannot access ontology document {}: {source}", path.display())]
    Io {
        /// Path of the document.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not a valid ontology document.
    #[cfg(feature = "serde")]
    #[error("malformed ontology document: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ontology: an optional ontology IRI and a set of axioms.
///
/// Axioms are kept in their structural order, so iteration and
/// serialization are deterministic.
///
/// # Document format
///
/// With the `serde` feature, an ontology reads from and writes to a JSON
/// document of the form `{"iri": "...", "axioms": [...]}` where each axiom
/// is externally tagged by its shape:
///
/// ```
/// let doc = r#"{
///   "iri": "http://ex.org/pizza",
///   "axioms": [
///     {"SubClassOf": {"sub": {"Class": "http://ex.org/Margherita"},
///                     "sup": {"Class": "http://ex.org/Pizza"}}}
///   ]
/// }"#;
/// let ontology = protege_owl::Ontology::from_json_str(doc).unwrap();
/// assert_eq!(ontology.axiom_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ontology {
    /// The ontology IRI, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub iri: Option<Iri>,
    #[cfg_attr(feature = "serde", serde(default))]
    axioms: BTreeSet<Axiom>,
}

impl Ontology {
    /// Creates an empty anonymous ontology.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ontology with the given IRI.
    #[must_use]
    pub fn with_iri(iri: impl Into<Iri>) -> Self {
        Self {
            iri: Some(iri.into()),
            axioms: BTreeSet::new(),
        }
    }

    /// Adds an axiom. Returns `false` if it was already present.
    pub fn add_axiom(&mut self, axiom: Axiom) -> bool {
        self.axioms.insert(axiom)
    }

    /// Removes an axiom. Returns `false` if it was not present.
    pub fn remove_axiom(&mut self, axiom: &Axiom) -> bool {
        self.axioms.remove(axiom)
    }

    /// Returns `true` if the ontology contains exactly this axiom.
    #[must_use]
    pub fn contains(&self, axiom: &Axiom) -> bool {
        self.axioms.contains(axiom)
    }

    /// Iterates over all axioms in structural order.
    pub fn axioms(&self) -> impl Iterator<Item = &Axiom> {
        self.axioms.iter()
    }

    /// Returns the number of axioms.
    #[must_use]
    pub fn axiom_count(&self) -> usize {
        self.axioms.len()
    }

    /// Returns the union of the signatures of all axioms.
    #[must_use]
    pub fn signature(&self) -> BTreeSet<Entity> {
        self.axioms.iter().flat_map(Axiom::signature).collect()
    }

    /// Returns the entities that are explicitly declared.
    #[must_use]
    pub fn declared_entities(&self) -> BTreeSet<&Entity> {
        self.axioms
            .iter()
            .filter_map(|ax| match ax {
                Axiom::Declaration { entity } => Some(entity),
                _ => None,
            })
            .collect()
    }

    /// Iterates over the axioms that mention `iri` anywhere.
    pub fn referencing<'a>(&'a self, iri: &'a Iri) -> impl Iterator<Item = &'a Axiom> + 'a {
        self.axioms.iter().filter(move |ax| ax.iris().contains(iri))
    }

    /// Parses an ontology from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Json`] if the document is malformed.
    #[cfg(feature = "serde")]
    pub fn from_json_str(document: &str) -> Result<Self, OntologyError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Renders this ontology as a pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Json`] if serialization fails.
    #[cfg(feature = "serde")]
    pub fn to_json_string(&self) -> Result<String, OntologyError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads an ontology JSON document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Io`] if the file cannot be read and
    /// [`OntologyError::Json`] if it is malformed.
    #[cfg(feature = "serde")]
    pub fn from_path(path: &Path) -> Result<Self, OntologyError> {
        let document = std::fs::read_to_string(path).map_err(|source| OntologyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&document)
    }

    /// Writes this ontology as a JSON document to disk.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Io`] if the file cannot be written.
    #[cfg(feature = "serde")]
    pub fn write_to_path(&self, path: &Path) -> Result<(), OntologyError> {
        let document = self.to_json_string()?;
        std::fs::write(path, document).map_err(|source| OntologyError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FromIterator<Axiom> for Ontology {
    fn from_iter<T: IntoIterator<Item = Axiom>>(iter: T) -> Self {
        Self {
            iri: None,
            axioms: iter.into_iter().collect(),
        }
    }
}

impl Extend<Axiom> for Ontology {
    fn extend<T: IntoIterator<Item = Axiom>>(&mut self, iter: T) {
        self.axioms.extend(iter);
    }
}
