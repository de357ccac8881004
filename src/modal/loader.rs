// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One-shot lazy loading of the search index.
//!
//! The index is fetched the first time the modal opens, never before. The
//! fetch itself belongs to the host; the loader only asks for it and later
//! consumes a single [`IndexEvent`]. A failed load leaves the loader
//! retryable, so the next open tries again.

use tracing::{debug, warn};

use super::host::ModalHost;
use super::render::error_markup;
use crate::config::ModalConfig;
use crate::error::IndexLoadError;
use crate::index::SearchIndexHandle;

/// The one completion message of an index fetch.
#[derive(Debug)]
pub enum IndexEvent {
    /// Response body of a successful request, not yet parsed.
    Ready(String),
    Failed(IndexLoadError),
}

/// What a completion event did.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded,
    Failed,
    /// No fetch was in flight (duplicate or late event).
    Ignored,
}

#[derive(Debug, Default)]
enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready(SearchIndexHandle),
    Failed,
}

/// Owner of the page session's single index handle.
#[derive(Debug, Default)]
pub struct IndexLoader {
    phase: LoadPhase,
}

impl IndexLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nothing loaded and nothing in flight.
    pub fn needs_load(&self) -> bool {
        matches!(self.phase, LoadPhase::Idle | LoadPhase::Failed)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, LoadPhase::Ready(_))
    }

    pub fn handle(&self) -> Option<&SearchIndexHandle> {
        match &self.phase {
            LoadPhase::Ready(handle) => Some(handle),
            _ => None,
        }
    }

    /// Show the loading indicator and ask the host for the index.
    ///
    /// No-op while a fetch is in flight or once an index exists.
    pub fn begin<H: ModalHost>(&mut self, host: &mut H, config: &ModalConfig) {
        if !self.needs_load() {
            return;
        }
        if matches!(self.phase, LoadPhase::Failed) {
            // Drop the previous attempt's error row
            host.set_results_markup("");
        }
        self.phase = LoadPhase::Loading;
        debug!(path = %config.index_path, "fetching search index");
        host.set_loading_visible(true);
        host.fetch_index(&config.index_path);
    }

    /// Consume the completion of the fetch started by [`begin`](Self::begin).
    ///
    /// On success the query listeners are attached only now, after the handle
    /// exists. On failure the results list gets the inline error row.
    pub fn finish<H: ModalHost>(
        &mut self,
        host: &mut H,
        event: IndexEvent,
        config: &ModalConfig,
    ) -> LoadOutcome {
        if !self.is_loading() {
            debug!("ignoring index event with no fetch in flight");
            return LoadOutcome::Ignored;
        }

        let built = match event {
            IndexEvent::Ready(body) => SearchIndexHandle::from_json(&body, config.fuzzy.clone()),
            IndexEvent::Failed(err) => Err(err),
        };
        host.set_loading_visible(false);

        match built {
            Ok(handle) => {
                debug!(records = handle.len(), "search index ready");
                self.phase = LoadPhase::Ready(handle);
                host.attach_query_listeners();
                LoadOutcome::Loaded
            }
            Err(err) => {
                warn!(error = %err, "search index failed to load");
                host.log_error(&format!("Error loading search index: {}", err));
                self.phase = LoadPhase::Failed;
                host.set_results_markup(&error_markup(&config.index_error_message));
                LoadOutcome::Failed
            }
        }
    }
}
