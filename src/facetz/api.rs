//! # API Facade
//!
//! A **thin facade** over the command layer and the single entry point for UI
//! clients.
//!
//! The facade:
//! - **Loads** the catalog from a [`CatalogStore`] and owns the resulting session
//! - **Normalizes inputs**: `dim=value` selector strings become typed toggles,
//!   dimension names and record fields both resolve to a [`Dimension`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no filtering itself (that lives in `filter.rs`) and never prints.
//!
//! `FacetzApi<S, D>` is generic over the store (`JsonCatalog` in production,
//! `InMemoryCatalog` in tests) and over the dimension set, defaulting to
//! [`ShoeDimension`].

use crate::commands::{self, CmdResult, Session};
use crate::config::FacetzConfig;
use crate::error::{FacetzError, Result};
use crate::model::{Dimension, ShoeDimension};
use crate::store::CatalogStore;
use std::path::Path;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, DimensionInfo, MessageLevel};

pub struct FacetzApi<S: CatalogStore, D: Dimension = ShoeDimension> {
    store: S,
    config: FacetzConfig,
    session: Session<D>,
}

impl<S: CatalogStore, D: Dimension> FacetzApi<S, D> {
    /// Load the catalog and index it. Nothing is selected initially.
    pub fn open(store: S, config: FacetzConfig) -> Result<Self> {
        let records = store.load_records()?;
        let session = Session::from_records(&records, &config)?;
        Ok(Self {
            store,
            config,
            session,
        })
    }

    /// Re-read the catalog and rebuild the index, dropping the selection.
    ///
    /// On failure the current session is kept as is.
    pub fn reload(&mut self) -> Result<CmdResult> {
        let records = self.store.load_records()?;
        self.session = Session::from_records(&records, &self.config)?;
        let mut result = commands::facets::run(&self.session)?;
        result.add_message(CmdMessage::info(format!(
            "Reloaded {} items",
            self.session.items().len()
        )));
        Ok(result)
    }

    pub fn session(&self) -> &Session<D> {
        &self.session
    }

    pub fn config(&self) -> &FacetzConfig {
        &self.config
    }

    /// Toggle each `dim=value` selector in order.
    pub fn select<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let toggles = parse_selectors::<D, I>(selectors)?;
        commands::select::run(&mut self.session, &toggles)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.session)
    }

    pub fn facets(&self) -> Result<CmdResult> {
        commands::facets::run(&self.session)
    }

    pub fn matches(&self) -> Result<CmdResult> {
        commands::matches::run(&self.session)
    }

    pub fn dimensions(&self) -> Result<CmdResult> {
        commands::dimensions::run(&self.session, &self.config)
    }
}

/// Config does not need a loaded catalog.
pub fn config<D: Dimension>(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    commands::config::run::<D>(config_dir, action)
}

/// Resolve a dimension by name ("colors") or record field ("color").
pub fn parse_dimension<D: Dimension>(s: &str) -> Result<D> {
    D::parse(s.trim()).ok_or_else(|| FacetzError::UnknownDimension(s.to_string()))
}

fn parse_selector<D: Dimension>(s: &str) -> Result<(D, String)> {
    let (dim, value) = s
        .split_once('=')
        .ok_or_else(|| FacetzError::Api(format!("Invalid selector (expected dim=value): {}", s)))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(FacetzError::Api(format!("Missing value in selector: {}", s)));
    }
    Ok((parse_dimension(dim)?, value.to_string()))
}

fn parse_selectors<D: Dimension, I: AsRef<str>>(selectors: &[I]) -> Result<Vec<(D, String)>> {
    selectors
        .iter()
        .map(|s| parse_selector(s.as_ref()))
        .collect()
}
