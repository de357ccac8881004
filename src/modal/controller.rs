// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search modal: lifecycle, index loading, querying and navigation.
//!
//! # Lifecycle
//!
//! ```text
//!            open()                 Activate timer
//!  Closed ──────────▶ Opening ─────────────────────▶ OpenLoadingIndex ─┐
//!    ▲                   │                      └──▶ OpenEmpty ◀───────┘ index event
//!    │      close()      │                               │ ▲
//!    └───────────────────┴──── any open state ◀──────────┘ │ input
//!                                                 OpenWithResults / OpenNoResults
//! ```
//!
//! Every `open()`/`close()` bumps a generation. Timers carry the generation
//! they were scheduled under, so a hide timer from an earlier close cannot
//! hide a modal the user has already reopened.

use tracing::debug;

use super::host::{KeyPress, Key, ModalHost, ModalTimer, TimerToken};
use super::loader::{IndexEvent, IndexLoader, LoadOutcome};
use super::navigator::FocusCursor;
use super::render;
use super::state::ModalState;
use crate::config::ModalConfig;
use crate::index::SearchIndexHandle;

/// Controller for one search modal on one page.
pub struct ModalController<H: ModalHost> {
    host: H,
    config: ModalConfig,
    state: ModalState,
    loader: IndexLoader,
    cursor: FocusCursor,
    generation: u64,
    /// A close is waiting for its hide timer to wipe the contents.
    hide_pending: bool,
    /// Set once the index exists; input before that is dropped.
    query_enabled: bool,
}

impl<H: ModalHost> ModalController<H> {
    /// Attach to the page. `None` when the page lacks the container, input or
    /// results list, in which case the feature stays off.
    pub fn mount(host: H, config: ModalConfig) -> Option<Self> {
        if !host.has_required_elements() {
            debug!("search modal elements missing; not mounting");
            return None;
        }
        Some(Self {
            host,
            config,
            state: ModalState::Closed,
            loader: IndexLoader::new(),
            cursor: FocusCursor::new(),
            generation: 0,
            hide_pending: false,
            query_enabled: false,
        })
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Focused row, `None` when nothing is focused.
    pub fn focus_index(&self) -> Option<usize> {
        self.cursor.current()
    }

    pub fn cursor(&self) -> &FocusCursor {
        &self.cursor
    }

    pub fn is_index_loaded(&self) -> bool {
        self.loader.is_loaded()
    }

    pub fn index(&self) -> Option<&SearchIndexHandle> {
        self.loader.handle()
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Show the modal. No-op unless closed.
    pub fn open(&mut self) {
        if self.state.is_open() {
            return;
        }
        self.generation += 1;
        if self.hide_pending {
            // Reopened inside the close transition; its hide timer is now stale
            self.hide_pending = false;
            self.clear_contents();
        }

        self.host.set_container_visible(true);
        self.host.schedule(
            self.config.open_delay_ms,
            TimerToken {
                kind: ModalTimer::Activate,
                generation: self.generation,
            },
        );
        self.host.set_scroll_locked(true);
        self.loader.begin(&mut self.host, &self.config);
        self.host.set_aria_hidden(false);
        self.transition(ModalState::Opening);
    }

    /// Start closing the modal. No-op when already closed.
    ///
    /// Scroll is restored right away; the container is hidden and wiped once
    /// the close transition has had time to play.
    pub fn close(&mut self) {
        if !self.state.is_open() {
            return;
        }
        self.generation += 1;
        self.host.set_active(false);
        self.host.schedule(
            self.config.close_delay_ms,
            TimerToken {
                kind: ModalTimer::Hide,
                generation: self.generation,
            },
        );
        self.hide_pending = true;
        self.host.set_scroll_locked(false);
        self.host.set_aria_hidden(true);
        self.transition(ModalState::Closed);
    }

    /// Toggle button behaviour.
    pub fn toggle(&mut self) {
        if self.state.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// A timer scheduled through the host has fired.
    pub fn on_timer(&mut self, token: TimerToken) {
        if token.generation != self.generation {
            debug!(?token, current = self.generation, "ignoring stale timer");
            return;
        }
        match token.kind {
            ModalTimer::Activate => {
                if self.state != ModalState::Opening {
                    return;
                }
                self.host.set_active(true);
                self.host.focus_input();
                let next = if self.loader.is_loading() {
                    ModalState::OpenLoadingIndex
                } else {
                    ModalState::OpenEmpty
                };
                self.transition(next);
            }
            ModalTimer::Hide => {
                if self.state != ModalState::Closed || !self.hide_pending {
                    return;
                }
                self.hide_pending = false;
                self.host.set_container_visible(false);
                self.clear_contents();
            }
        }
    }

    /// The index fetch has completed.
    pub fn on_index_event(&mut self, event: IndexEvent) {
        match self.loader.finish(&mut self.host, event, &self.config) {
            LoadOutcome::Loaded => self.query_enabled = true,
            LoadOutcome::Failed => self.cursor.reset(),
            LoadOutcome::Ignored => return,
        }
        if self.state == ModalState::OpenLoadingIndex {
            self.transition(ModalState::OpenEmpty);
        }
    }

    /// The query field's value changed.
    ///
    /// Ignored until the index exists and while the modal is not settled
    /// open, so a closed or still-opening modal never renders rows.
    pub fn on_input(&mut self, value: &str) {
        if !self.query_enabled || !self.state.is_settled() {
            return;
        }
        let query = value.trim();
        if query.is_empty() {
            self.host.set_results_markup("");
            self.host.set_empty_visible(false);
            self.cursor.reset();
            self.settle(ModalState::OpenEmpty);
            return;
        }

        let Some(index) = self.loader.handle() else {
            return;
        };
        let results = index.search(query, self.config.result_limit);
        debug!(query, hits = results.len(), "search");

        self.cursor.reset();
        let rows = render::render(&mut self.host, &results);
        self.settle(if rows > 0 {
            ModalState::OpenWithResults
        } else {
            ModalState::OpenNoResults
        });
    }

    /// A key pressed inside the query field. Returns whether it was consumed.
    pub fn on_query_key(&mut self, key: Key) -> bool {
        if !self.query_enabled || !self.state.is_settled() {
            return false;
        }
        self.cursor.handle_key(&mut self.host, key)
    }

    /// A key pressed anywhere on the page. Returns whether it was consumed.
    ///
    /// `Alt+/` opens the modal, `Escape` closes it.
    pub fn on_global_key(&mut self, press: KeyPress) -> bool {
        if press.is_open_shortcut() {
            self.open();
            return true;
        }
        if press.key == Key::Escape && self.state.is_open() {
            self.close();
            return true;
        }
        false
    }

    /// A result row was clicked.
    pub fn activate(&mut self, row: usize) {
        if let Some(url) = self.host.row_urls().get(row) {
            self.host.navigate(url);
        }
    }

    fn clear_contents(&mut self) {
        self.host.clear_input();
        self.host.set_results_markup("");
        self.host.set_empty_visible(false);
        self.cursor.reset();
    }

    /// Move to a results-driven state, but only once the modal is settled.
    fn settle(&mut self, next: ModalState) {
        if self.state.is_settled() {
            self.transition(next);
        }
    }

    fn transition(&mut self, next: ModalState) {
        if self.state != next {
            debug!(from = %self.state, to = %next, "search modal");
            self.state = next;
        }
    }
}
