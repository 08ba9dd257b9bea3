use crate::config::FacetzConfig;
use crate::error::Result;
use crate::filter::{FacetFilter, FacetView};
use crate::index::ValueIndex;
use crate::model::{Dimension, Item, ItemView, Record};

pub mod clear;
pub mod config;
pub mod dimensions;
pub mod facets;
pub mod matches;
pub mod select;

/// A loaded catalog and the filter over it.
///
/// One session per user; nothing is shared between sessions.
#[derive(Debug, Clone)]
pub struct Session<D: Dimension> {
    items: Vec<Item<D, String>>,
    filter: FacetFilter<D, String>,
}

impl<D: Dimension> Session<D> {
    /// Convert records using the configured fields and index them.
    pub fn from_records(records: &[Record], config: &FacetzConfig) -> Result<Self> {
        let items: Vec<Item<D, String>> = records
            .iter()
            .map(|record| Item::from_record(record, |d| config.field_for(d)))
            .collect();
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<Item<D, String>>) -> Result<Self> {
        let index = ValueIndex::build(&items)?;
        Ok(Self {
            items,
            filter: FacetFilter::new(index),
        })
    }

    pub fn items(&self) -> &[Item<D, String>] {
        &self.items
    }

    pub fn filter(&self) -> &FacetFilter<D, String> {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FacetFilter<D, String> {
        &mut self.filter
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A dimension and the record field it is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionInfo {
    pub name: &'static str,
    pub field: String,
    pub values: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub facets: Vec<FacetView<String>>,
    pub matched_items: Vec<ItemView>,
    pub dimensions: Vec<DimensionInfo>,
    pub config: Option<Vec<(String, String)>>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_facets(mut self, facets: Vec<FacetView<String>>) -> Self {
        self.facets = facets;
        self
    }

    pub fn with_matched_items(mut self, items: Vec<ItemView>) -> Self {
        self.matched_items = items;
        self
    }

    pub fn with_dimensions(mut self, dimensions: Vec<DimensionInfo>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_config(mut self, entries: Vec<(String, String)>) -> Self {
        self.config = Some(entries);
        self
    }
}
