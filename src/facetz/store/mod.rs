//! # Storage Layer
//!
//! The engine itself never reads files. Items come from a [`CatalogStore`],
//! which hands back flat [`Record`]s; turning those into typed items is the
//! command layer's job.
//!
//! ## Implementations
//!
//! - [`fs::JsonCatalog`]: a JSON file on disk
//!   - either a bare array of records
//!   - or an object holding the array under a collection key (`{"shoes": [...]}`)
//!
//! - [`memory::InMemoryCatalog`]: records held in memory, for tests
//!
//! ## Storage Format
//!
//! ```text
//! data.json
//! {
//!   "shoes": [
//!     { "color": "black", "size": 10.5, "width": "narrow" },
//!     ...
//!   ]
//! }
//! ```
//!
//! Fields other than the configured dimension fields are ignored.

use crate::error::Result;
use crate::model::Record;

pub mod fs;
pub mod memory;

/// Abstract source of catalog records.
pub trait CatalogStore {
    /// Load every record, in catalog order.
    fn load_records(&self) -> Result<Vec<Record>>;
}
