use super::CatalogStore;
use crate::error::Result;
use crate::model::Record;

/// In-memory catalog for testing and development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<Record>,
}

impl InMemoryCatalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }
}

impl CatalogStore for InMemoryCatalog {
    fn load_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use serde_json::json;

    /// A shoe record with the default field names.
    pub fn shoe(color: &str, size: &str, width: &str) -> Record {
        let mut record = Record::new();
        record.insert("color".into(), json!(color));
        record.insert("size".into(), json!(size));
        record.insert("width".into(), json!(width));
        record
    }

    /// red/9/narrow, red/10/standard, blue/9/standard
    pub fn sample_catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            shoe("red", "9", "narrow"),
            shoe("red", "10", "standard"),
            shoe("blue", "9", "standard"),
        ])
    }
}
