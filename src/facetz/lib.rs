//! # Facetz Architecture
//!
//! Facetz is a **UI-agnostic faceted-filtering library**. Given a catalog whose
//! items each carry one value per dimension (colors, sizes, widths, ...), it
//! tracks one selected value per dimension and works out, after every toggle,
//! which values are still reachable and which must be disabled.
//!
//! The CLI is one client of the library, not the application itself.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders facets, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs ("colors=red" → (Colors, "red"))       │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on a Session (items + filter)                   │
//! │  - Returns CmdResult values with facets, items, messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (index.rs, filter.rs)                               │
//! │  - ValueIndex: co-occurrence of values across dimensions    │
//! │  - FacetFilter: selection, toggle, full state recompute     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - CatalogStore trait                                       │
//! │  - JsonCatalog (production), InMemoryCatalog (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Engine
//!
//! `index` and `filter` are synchronous and pure apart from the state a
//! [`filter::FacetFilter`] owns. Every session owns its own filter; nothing is
//! global and nothing needs locking.
//!
//! ## Testing Strategy
//!
//! 1. **Engine** (`index.rs`, `filter.rs`): the toggle/disable semantics are
//!    pinned down here.
//! 2. **Commands**: messages and result shapes, over `InMemoryCatalog`.
//! 3. **API**: selector parsing and dispatch.
//! 4. **CLI**: end-to-end runs of the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic per command, plus `Session`
//! - [`filter`]: Filter state machine
//! - [`index`]: Co-occurrence index builder
//! - [`model`]: `Dimension`, `Item`, `Record`
//! - [`store`]: Catalog sources
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod index;
pub mod model;
pub mod store;
