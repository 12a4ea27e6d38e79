//! Record type for the image data table.
//!
//! A record is deliberately schemaless: the partial template decides which
//! fields it reads, this crate only carries them through.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata for a single image, keyed by field name.
///
/// The usual fields are `alt`, `path`, `caption`, `credit_url` and
/// `credit_name`, but nothing here enforces that set. The record is an
/// opaque bag the partial interprets; unknown fields pass through
/// untouched and missing fields are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRecord(BTreeMap<String, String>);

impl ImageRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value by name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Set a field value, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(field.into(), value.into())
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the record has no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(field, value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, String>> for ImageRecord {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ImageRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_get_and_insert() {
        let mut record = ImageRecord::new();
        assert!(record.is_empty());

        assert_eq!(record.insert("alt", "A squirrel"), None);
        assert_eq!(record.get("alt"), Some("A squirrel"));
        assert_eq!(record.get("path"), None);

        let old = record.insert("alt", "Another squirrel");
        assert_eq!(old.as_deref(), Some("A squirrel"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_record_serializes_as_plain_map() {
        let record: ImageRecord = [("alt", "x"), ("path", "/y.jpg")].into_iter().collect();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"alt": "x", "path": "/y.jpg"}));
    }

    #[test]
    fn test_record_from_iter_orders_fields() {
        let record: ImageRecord = [("z", "1"), ("a", "2")].into_iter().collect();
        let fields: Vec<_> = record.iter().map(|(k, _)| k).collect();
        assert_eq!(fields, ["a", "z"]);
    }
}
