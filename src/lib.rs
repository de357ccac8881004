// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search modal and smart header for static sites.
//!
//! Two small browser controllers, written as plain Rust state machines and
//! shipped to the page as WebAssembly:
//!
//! - a **search modal** that lazily loads the site's `index.json` on first
//!   open, fuzzy-matches the query against it on every keystroke, renders the
//!   top hits as escaped rows and lets the keyboard walk them;
//! - a **smart header** that slides out of the way while reading downwards
//!   and comes back on the way up.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────┐
//! │  types.rs   │────▶│   index.rs   │────▶│       modal/         │
//! │(SearchRecord│     │ (SearchIndex │     │ loader → render →    │
//! │ MatchResult)│     │  Handle)     │     │ navigator, controller│
//! └─────────────┘     └──────────────┘     └──────────────────────┘
//!                            ▲                        │ ModalHost
//!                     ┌──────┴──────┐                 ▼
//!                     │   fuzzy/    │        ┌─────────────────┐
//!                     │(edit errors,│        │ runtime/wasm.rs │
//!                     │  scoring)   │        │  (JS host glue) │
//!                     └─────────────┘        └─────────────────┘
//! ```
//!
//! Neither controller touches the DOM directly. They talk to a host trait
//! ([`ModalHost`], [`HeaderHost`]); in the browser that is a JS object of
//! callbacks, in tests a recorder.
//!
//! # Usage
//!
//! ```
//! use sitefind::{FuzzyOptions, SearchIndexHandle};
//!
//! let index = SearchIndexHandle::from_json(
//!     r#"[{"title": "Alpha", "permalink": "/a", "summary": "first"}]"#,
//!     FuzzyOptions::default(),
//! )?;
//! let results = index.search("Alp", 10);
//! assert_eq!(results[0].record.permalink, "/a");
//! # Ok::<(), sitefind::IndexLoadError>(())
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod header;
pub mod index;
pub mod inspect;
pub mod modal;
pub mod runtime;
pub mod types;
pub mod utils;

pub use config::{HeaderConfig, ModalConfig};
pub use error::IndexLoadError;
pub use fuzzy::FuzzyOptions;
pub use header::{HeaderController, HeaderHost, HeaderVisibility};
pub use index::{SearchIndexHandle, DEFAULT_RESULT_LIMIT};
pub use inspect::IndexSummary;
pub use modal::{
    FocusCursor, IndexEvent, Key, KeyPress, ModalController, ModalHost, ModalState, ModalTimer,
    TimerToken,
};
pub use types::{FieldKey, MatchResult, SearchRecord};
pub use utils::{escape_html, normalize};
