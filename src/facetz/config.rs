use crate::error::{FacetzError, Result};
use crate::model::Dimension;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CATALOG: &str = "data.json";
const DEFAULT_COLLECTION: &str = "shoes";
const FIELD_PREFIX: &str = "field.";

/// Configuration for facetz, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FacetzConfig {
    /// Catalog file to load items from
    #[serde(default = "default_catalog")]
    pub catalog: String,

    /// Key holding the record array when the catalog file is a JSON object
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Record field overrides, keyed by dimension name (e.g. "colors" -> "colour")
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

fn default_catalog() -> String {
    DEFAULT_CATALOG.to_string()
}

fn default_collection() -> String {
    DEFAULT_COLLECTION.to_string()
}

impl Default for FacetzConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            collection: default_collection(),
            fields: BTreeMap::new(),
        }
    }
}

impl FacetzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FacetzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// The record field `dimension` is read from.
    pub fn field_for<D: Dimension>(&self, dimension: D) -> String {
        self.fields
            .get(dimension.name())
            .cloned()
            .unwrap_or_else(|| dimension.field().to_string())
    }

    /// Get a value by key: `catalog`, `collection` or `field.<dimension>`.
    pub fn get<D: Dimension>(&self, key: &str) -> Option<String> {
        match key {
            "catalog" => Some(self.catalog.clone()),
            "collection" => Some(self.collection.clone()),
            _ => {
                let dimension = D::parse(key.strip_prefix(FIELD_PREFIX)?)?;
                Some(self.field_for(dimension))
            }
        }
    }

    /// Set a value by key. Field keys must name a known dimension.
    pub fn set<D: Dimension>(&mut self, key: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(FacetzError::Config(format!("Empty value for {}", key)));
        }
        match key {
            "catalog" => self.catalog = value.to_string(),
            "collection" => self.collection = value.to_string(),
            _ => {
                let dimension = key
                    .strip_prefix(FIELD_PREFIX)
                    .and_then(D::parse)
                    .ok_or_else(|| FacetzError::Config(format!("Unknown config key: {}", key)))?;
                self.fields
                    .insert(dimension.name().to_string(), value.to_string());
            }
        }
        Ok(())
    }

    /// All keys with their effective values, dimension fields included.
    pub fn entries<D: Dimension>(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            ("catalog".to_string(), self.catalog.clone()),
            ("collection".to_string(), self.collection.clone()),
        ];
        entries.extend(D::ALL.iter().map(|&d| {
            (format!("{}{}", FIELD_PREFIX, d.name()), self.field_for(d))
        }));
        entries
    }
}
