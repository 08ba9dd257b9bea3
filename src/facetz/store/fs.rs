use super::CatalogStore;
use crate::error::{FacetzError, Result};
use crate::model::Record;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// A catalog read from a JSON file.
pub struct JsonCatalog {
    path: PathBuf,
    collection: String,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            collection: "shoes".to_string(),
        }
    }

    pub fn with_collection(mut self, collection: &str) -> Self {
        self.collection = collection.to_string();
        self
    }

    fn records_from(&self, value: Value) -> Result<Vec<Record>> {
        let array = match value {
            Value::Array(array) => array,
            Value::Object(mut map) => match map.remove(&self.collection) {
                Some(Value::Array(array)) => array,
                Some(_) => {
                    return Err(FacetzError::Catalog(format!(
                        "'{}' in {} is not an array",
                        self.collection,
                        self.path.display()
                    )))
                }
                None => {
                    return Err(FacetzError::Catalog(format!(
                        "No '{}' collection in {}",
                        self.collection,
                        self.path.display()
                    )))
                }
            },
            _ => {
                return Err(FacetzError::Catalog(format!(
                    "{} must hold an array or an object",
                    self.path.display()
                )))
            }
        };

        array
            .into_iter()
            .enumerate()
            .map(|(i, entry)| match entry {
                Value::Object(record) => Ok(record),
                _ => Err(FacetzError::Catalog(format!(
                    "Entry {} in {} is not an object",
                    i,
                    self.path.display()
                ))),
            })
            .collect()
    }
}

impl CatalogStore for JsonCatalog {
    fn load_records(&self) -> Result<Vec<Record>> {
        let content = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;
        let records = self.records_from(value)?;
        debug!(path = %self.path.display(), records = records.len(), "loaded catalog");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_catalog(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("data.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn reads_named_collection() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(
            &temp,
            r#"{"shoes": [{"color": "red", "size": 9}, {"color": "blue", "size": 10.5}]}"#,
        );

        let records = JsonCatalog::new(path).load_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["color"], "blue");
    }

    #[test]
    fn reads_bare_array() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(&temp, r#"[{"color": "red"}]"#);

        let records = JsonCatalog::new(path)
            .with_collection("ignored")
            .load_records()
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn custom_collection_key() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(&temp, r#"{"boots": [{"color": "tan"}], "shoes": []}"#);

        let records = JsonCatalog::new(path)
            .with_collection("boots")
            .load_records()
            .unwrap();
        assert_eq!(records[0]["color"], "tan");
    }

    #[test]
    fn missing_collection_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(&temp, r#"{"boots": []}"#);

        let err = JsonCatalog::new(path).load_records().unwrap_err();
        assert!(matches!(err, FacetzError::Catalog(_)));
    }

    #[test]
    fn non_object_entry_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(&temp, r#"{"shoes": [{"color": "red"}, "oops"]}"#);

        let err = JsonCatalog::new(path).load_records().unwrap_err();
        assert!(err.to_string().contains("Entry 1"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = JsonCatalog::new(temp.path().join("nope.json"))
            .load_records()
            .unwrap_err();
        assert!(matches!(err, FacetzError::Io(_)));
    }

    #[test]
    fn invalid_json_is_serialization_error() {
        let temp = TempDir::new().unwrap();
        let path = write_catalog(&temp, "{ not json");
        let err = JsonCatalog::new(path).load_records().unwrap_err();
        assert!(matches!(err, FacetzError::Serialization(_)));
    }
}
