//! # CLI Layer
//!
//! One possible UI client for facetz. This is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Installs the tracing subscriber
//! - Formats output for human consumption
//!
//! Each invocation loads the catalog, applies the `-s dim=value` toggles in
//! the order given and renders the result. Selections are not persisted
//! between invocations.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `open_api()`: Loads config and catalog into a `FacetzApi`
//! - `handle_*()`: Per-command handlers that call the API and render output

use super::render::{
    eprint_messages, print_messages, render_config, render_dimensions, render_facets,
    render_items,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use facetz::api::{self, ConfigAction, FacetzApi};
use facetz::config::FacetzConfig;
use facetz::error::Result;
use facetz::model::ShoeDimension;
use facetz::store::fs::JsonCatalog;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "FACETZ_CONFIG_DIR";
const LOCAL_CONFIG_DIR: &str = ".facetz";

pub fn run() -> Result<()> {
    let Cli {
        command,
        catalog,
        config_dir,
        verbose,
    } = Cli::parse();

    init_logging(verbose);
    let config_dir = resolve_config_dir(config_dir);
    debug!(config_dir = %config_dir.display(), "resolved config dir");

    match command {
        Some(Commands::Show { select, json }) => {
            handle_show(&config_dir, catalog, &select, json)
        }
        Some(Commands::Matches { select, json }) => {
            handle_matches(&config_dir, catalog, &select, json)
        }
        Some(Commands::Dimensions) => handle_dimensions(&config_dir, catalog),
        Some(Commands::Config { key, value }) => handle_config(&config_dir, key, value),
        None => handle_show(&config_dir, catalog, &[], false),
    }
}

/// `-v` forces debug; otherwise `RUST_LOG` decides, defaulting to warn.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(tracing::Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(tracing::Level::WARN.to_string()))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_config_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    let local = PathBuf::from(LOCAL_CONFIG_DIR);
    if local.is_dir() {
        return local;
    }
    ProjectDirs::from("com", "facetz", "facetz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or(local)
}

fn open_api(config_dir: &Path, catalog: Option<PathBuf>) -> Result<FacetzApi<JsonCatalog>> {
    let config = FacetzConfig::load(config_dir)?;
    let path = catalog.unwrap_or_else(|| PathBuf::from(&config.catalog));
    let store = JsonCatalog::new(path).with_collection(&config.collection);
    FacetzApi::open(store, config)
}

fn handle_show(
    config_dir: &Path,
    catalog: Option<PathBuf>,
    select: &[String],
    json: bool,
) -> Result<()> {
    let mut api = open_api(config_dir, catalog)?;
    let result = if select.is_empty() {
        api.facets()?
    } else {
        api.select(select)?
    };

    if json {
        eprint_messages(&result.messages);
        println!("{}", serde_json::to_string_pretty(&result.facets)?);
    } else {
        print_messages(&result.messages);
        print!("{}", render_facets(&result.facets));
    }
    Ok(())
}

fn handle_matches(
    config_dir: &Path,
    catalog: Option<PathBuf>,
    select: &[String],
    json: bool,
) -> Result<()> {
    let mut api = open_api(config_dir, catalog)?;
    if !select.is_empty() {
        let toggled = api.select(select)?;
        eprint_messages(&toggled.messages);
    }
    let result = api.matches()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.matched_items)?);
        eprint_messages(&result.messages);
    } else {
        print!("{}", render_items(&result.matched_items));
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_dimensions(config_dir: &Path, catalog: Option<PathBuf>) -> Result<()> {
    let api = open_api(config_dir, catalog)?;
    let result = api.dimensions()?;
    print!("{}", render_dimensions(&result.dimensions));
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = api::config::<ShoeDimension>(config_dir, action)?;
    if let Some(entries) = &result.config {
        print!("{}", render_config(entries));
    }
    print_messages(&result.messages);
    Ok(())
}
