//! Site-wide image table storage.
//!
//! The table is owned by the host build pipeline: it is loaded once before
//! any page renders and read by every tag invocation afterwards. Lookups
//! happen fresh on every render, so a host that reloads the table between
//! builds (watch mode) is observed without any cache invalidation here.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use super::error::DataError;
use super::types::ImageRecord;

/// Image table shared between the host pipeline and tag instances.
///
/// `RwLock` allows many concurrent page renders to read while the host
/// (and only the host) replaces records between builds.
pub type SharedImageTable = Arc<RwLock<ImageTable>>;

/// Mapping from image identifier to its metadata record.
///
/// Lookup is an exact string match on the identifier: no fuzzy matching,
/// no default image, no case normalization.
#[derive(Debug, Default)]
pub struct ImageTable {
    images: BTreeMap<String, ImageRecord>,
}

impl ImageTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the table from a TOML data file.
    ///
    /// The file is one table per image, e.g.:
    ///
    /// ```toml
    /// [squirrel]
    /// alt = "A lovely squirrel"
    /// path = "/images/squirrel.jpg"
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let raw = fs::read_to_string(path).map_err(|e| DataError::Io(path.to_path_buf(), e))?;
        let images: BTreeMap<String, ImageRecord> = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), count = images.len(), "loaded image table");
        Ok(Self { images })
    }

    /// Look up a record by identifier.
    pub fn get(&self, id: &str) -> Option<&ImageRecord> {
        self.images.get(id)
    }

    /// Insert or replace a record.
    pub fn insert(&mut self, id: impl Into<String>, record: ImageRecord) {
        self.images.insert(id.into(), record);
    }

    /// Remove a record by identifier.
    pub fn remove(&mut self, id: &str) -> Option<ImageRecord> {
        self.images.remove(id)
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the table has any records.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Wrap the table for sharing with tag instances.
    pub fn into_shared(self) -> SharedImageTable {
        Arc::new(RwLock::new(self))
    }
}
