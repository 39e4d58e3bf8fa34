//! Storage of per-project and per-user entity graph settings.
//!
//! Settings live as JSON documents in a [`DocumentCollection`]. A document
//! is found by an equality filter on top-level fields; a `null` filter value
//! also matches a missing field.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde_json::{Map, Value};

use crate::settings::{ProjectId, ProjectUserEntityGraphSettings, UserId};

/// Errors raised by settings storage.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A collection file could not be read or written.
    #[error("collection file {}: {source}", path.display())]
    Io {
        /// The collection file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// A collection file does not hold a JSON array of objects.
    #[error("collection file {} is not a JSON array of documents", path.display())]
    Malformed {
        /// The collection file.
        path: PathBuf,
    },
    /// A document could not be converted to or from settings.
    #[error("settings document: {0}")]
    Json(#[from] serde_json::Error),
}

/// An equality filter over top-level document fields.
pub type Filter = Map<String, Value>;

/// The outcome of [`DocumentCollection::replace_one`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaceOutcome {
    /// A document matched the filter and was replaced.
    pub matched: bool,
    /// No document matched and the replacement was inserted.
    pub upserted: bool,
}

/// A named collection of JSON documents.
pub trait DocumentCollection: Send + Sync {
    /// Returns the first document matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn find_first(&self, filter: &Filter) -> Result<Option<Value>, RepositoryError>;

    /// Replaces the first document matching `filter` with `document`,
    /// inserting it instead when nothing matches and `upsert` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn replace_one(
        &self,
        filter: &Filter,
        document: Value,
        upsert: bool,
    ) -> Result<ReplaceOutcome, RepositoryError>;

    /// Returns the number of stored documents.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no documents.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns `true` if `document` satisfies every field of `filter`.
#[must_use]
pub fn matches_filter(document: &Value, filter: &Filter) -> bool {
    filter.iter().all(|(key, wanted)| match document.get(key) {
        Some(found) => found == wanted,
        None => wanted.is_null(),
    })
}

fn replace_in(
    documents: &mut Vec<Value>,
    filter: &Filter,
    document: Value,
    upsert: bool,
) -> ReplaceOutcome {
    if let Some(slot) = documents.iter_mut().find(|d| matches_filter(d, filter)) {
        *slot = document;
        return ReplaceOutcome {
            matched: true,
            upserted: false,
        };
    }
    if upsert {
        documents.push(document);
        return ReplaceOutcome {
            matched: false,
            upserted: true,
        };
    }
    ReplaceOutcome::default()
}

/// An in-process collection.
#[derive(Debug, Default)]
pub struct MemoryCollection {
    documents: RwLock<Vec<Value>>,
}

impl MemoryCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentCollection for MemoryCollection {
    fn find_first(&self, filter: &Filter) -> Result<Option<Value>, RepositoryError> {
        Ok(self
            .documents
            .read()
            .iter()
            .find(|d| matches_filter(d, filter))
            .cloned())
    }

    fn replace_one(
        &self,
        filter: &Filter,
        document: Value,
        upsert: bool,
    ) -> Result<ReplaceOutcome, RepositoryError> {
        Ok(replace_in(&mut self.documents.write(), filter, document, upsert))
    }

    fn len(&self) -> usize {
        self.documents.read().len()
    }
}

/// A collection persisted as one JSON array file, rewritten on every
/// change.
#[derive(Debug)]
pub struct FileCollection {
    path: PathBuf,
    documents: RwLock<Vec<Value>>,
}

impl FileCollection {
    /// Opens the collection `name` under `dir`, stored in `<dir>/<name>.json`.
    /// A missing file is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(dir: &Path, name: &str) -> Result<Self, RepositoryError> {
        let path = dir.join(format!("{name}.json"));
        let documents = match fs::read_to_string(&path) {
            Ok(text) => parse_documents(&path, &text)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(RepositoryError::Io { path, source }),
        };
        tracing::debug!(path = %path.display(), documents = documents.len(), "opened collection");
        Ok(Self {
            path,
            documents: RwLock::new(documents),
        })
    }

    /// Returns the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, documents: &[Value]) -> Result<(), RepositoryError> {
        let io_error = |source| RepositoryError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let text = serde_json::to_string_pretty(documents)?;
        fs::write(&self.path, text).map_err(io_error)
    }
}

fn parse_documents(path: &Path, text: &str) -> Result<Vec<Value>, RepositoryError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(documents) if documents.iter().all(Value::is_object) => Ok(documents),
        _ => Err(RepositoryError::Malformed {
            path: path.to_path_buf(),
        }),
    }
}

impl DocumentCollection for FileCollection {
    fn find_first(&self, filter: &Filter) -> Result<Option<Value>, RepositoryError> {
        Ok(self
            .documents
            .read()
            .iter()
            .find(|d| matches_filter(d, filter))
            .cloned())
    }

    fn replace_one(
        &self,
        filter: &Filter,
        document: Value,
        upsert: bool,
    ) -> Result<ReplaceOutcome, RepositoryError> {
        let mut documents = self.documents.write();
        let mut updated = documents.clone();
        let outcome = replace_in(&mut updated, filter, document, upsert);
        if outcome.matched || outcome.upserted {
            self.persist(&updated)?;
            *documents = updated;
        }
        Ok(outcome)
    }

    fn len(&self) -> usize {
        self.documents.read().len()
    }
}

/// Loads and saves [`ProjectUserEntityGraphSettings`].
pub trait EntityGraphSettingsRepository {
    /// Stores `settings`, replacing any record for the same project and
    /// user.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be encoded or written.
    fn save_settings(&self, settings: &ProjectUserEntityGraphSettings)
        -> Result<(), RepositoryError>;

    /// Returns the stored project default, or the built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored record cannot be read or decoded.
    fn project_default_settings(
        &self,
        project_id: &ProjectId,
    ) -> Result<ProjectUserEntityGraphSettings, RepositoryError>;

    /// Returns the user's record, else the stored project default, else the
    /// built-in default.
    ///
    /// # Errors
    ///
    /// Returns an error if a stored record cannot be read or decoded.
    fn settings_for_user_or_project_default(
        &self,
        project_id: &ProjectId,
        user_id: Option<&UserId>,
    ) -> Result<ProjectUserEntityGraphSettings, RepositoryError>;

    /// Prepares the store for lookups by project and user.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the request.
    fn ensure_indexes(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

/// An [`EntityGraphSettingsRepository`] over a [`DocumentCollection`].
#[derive(Debug)]
pub struct DocumentSettingsRepository<C> {
    collection: C,
}

impl<C: DocumentCollection> DocumentSettingsRepository<C> {
    /// Name of the settings collection.
    pub const COLLECTION_NAME: &'static str = "EntityGraphSettings";

    /// Wraps `collection`.
    pub fn new(collection: C) -> Self {
        Self { collection }
    }

    /// Returns the underlying collection.
    pub fn collection(&self) -> &C {
        &self.collection
    }

    /// The filter selecting the record of `project_id` and `user_id`.
    #[must_use]
    pub fn filter(project_id: &ProjectId, user_id: Option<&UserId>) -> Filter {
        let mut filter = Filter::new();
        filter.insert(
            ProjectUserEntityGraphSettings::PROJECT_ID.to_owned(),
            Value::String(project_id.as_str().to_owned()),
        );
        filter.insert(
            ProjectUserEntityGraphSettings::USER_ID.to_owned(),
            user_id.map_or(Value::Null, |u| Value::String(u.as_str().to_owned())),
        );
        filter
    }

    fn find(
        &self,
        project_id: &ProjectId,
        user_id: Option<&UserId>,
    ) -> Result<Option<ProjectUserEntityGraphSettings>, RepositoryError> {
        self.collection
            .find_first(&Self::filter(project_id, user_id))?
            .map(serde_json::from_value)
            .transpose()
            .map_err(RepositoryError::from)
    }
}

impl DocumentSettingsRepository<MemoryCollection> {
    /// A repository over a fresh in-memory collection.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryCollection::new())
    }
}

impl DocumentSettingsRepository<FileCollection> {
    /// A repository over the settings collection file under `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing collection file cannot be loaded.
    pub fn in_directory(dir: &Path) -> Result<Self, RepositoryError> {
        FileCollection::open(dir, Self::COLLECTION_NAME).map(Self::new)
    }
}

impl<C: DocumentCollection> EntityGraphSettingsRepository for DocumentSettingsRepository<C> {
    fn save_settings(
        &self,
        settings: &ProjectUserEntityGraphSettings,
    ) -> Result<(), RepositoryError> {
        let filter = Self::filter(&settings.project_id, settings.user_id.as_ref());
        let document = serde_json::to_value(settings)?;
        let outcome = self.collection.replace_one(&filter, document, true)?;
        tracing::debug!(
            project = %settings.project_id,
            user = settings.user_id.as_ref().map(UserId::as_str),
            upserted = outcome.upserted,
            "saved entity graph settings"
        );
        Ok(())
    }

    fn project_default_settings(
        &self,
        project_id: &ProjectId,
    ) -> Result<ProjectUserEntityGraphSettings, RepositoryError> {
        Ok(self.find(project_id, None)?.unwrap_or_else(|| {
            ProjectUserEntityGraphSettings::default_for(project_id.clone(), None)
        }))
    }

    fn settings_for_user_or_project_default(
        &self,
        project_id: &ProjectId,
        user_id: Option<&UserId>,
    ) -> Result<ProjectUserEntityGraphSettings, RepositoryError> {
        if let Some(user_id) = user_id {
            if let Some(found) = self.find(project_id, Some(user_id))? {
                return Ok(found);
            }
            tracing::trace!(project = %project_id, user = %user_id, "no user settings");
        }
        self.project_default_settings(project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filter(value: Value) -> Filter {
        match value {
            Value::Object(map) => map,
            _ => Filter::new(),
        }
    }

    #[test]
    fn null_filter_matches_missing_field() {
        let doc = json!({"projectId": "p"});
        assert!(matches_filter(&doc, &filter(json!({"projectId": "p", "userId": null}))));
        assert!(!matches_filter(&doc, &filter(json!({"userId": "u"}))));
    }

    #[test]
    fn replace_without_upsert_leaves_collection_alone() {
        let collection = MemoryCollection::new();
        let outcome = collection
            .replace_one(&filter(json!({"k": 1})), json!({"k": 1}), false)
            .unwrap_or_default();
        assert_eq!(outcome, ReplaceOutcome::default());
        assert!(collection.is_empty());
    }

    #[test]
    fn upsert_then_replace() {
        let collection = MemoryCollection::new();
        let f = filter(json!({"k": 1}));
        let first = collection.replace_one(&f, json!({"k": 1, "v": "a"}), true);
        assert!(matches!(first, Ok(ReplaceOutcome { upserted: true, .. })));
        let second = collection.replace_one(&f, json!({"k": 1, "v": "b"}), true);
        assert!(matches!(second, Ok(ReplaceOutcome { matched: true, .. })));
        assert_eq!(collection.len(), 1);
        let found = collection.find_first(&f).ok().flatten();
        assert_eq!(found, Some(json!({"k": 1, "v": "b"})));
    }

    #[test]
    fn filter_carries_null_user_for_project_default() {
        let f = DocumentSettingsRepository::<MemoryCollection>::filter(&ProjectId::new("p"), None);
        assert_eq!(Value::Object(f), json!({"projectId": "p", "userId": null}));
    }
}
