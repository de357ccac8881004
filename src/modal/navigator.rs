// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard navigation over the rendered rows.
//!
//! One cursor, `None` until the user presses ArrowDown. The row set is read
//! from the host on every key so a re-render can never leave the cursor
//! pointing at rows that no longer exist.
//!
//! ArrowUp stops at the first row rather than returning to "nothing
//! focused". Only a fresh render or closing the modal clears the cursor.

use super::host::{Key, ModalHost};

/// The focused-result cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FocusCursor {
    index: Option<usize>,
}

impl FocusCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.index
    }

    /// The cursor as the DOM sees it: `-1` when no row is focused.
    pub fn as_dom_index(&self) -> i32 {
        self.index.map_or(-1, |i| i as i32)
    }

    pub fn reset(&mut self) {
        self.index = None;
    }

    /// React to a key pressed in the query field.
    ///
    /// Returns whether the key was consumed (the host should then suppress
    /// its default action). Nothing is consumed while the list is empty.
    pub fn handle_key<H: ModalHost>(&mut self, host: &mut H, key: Key) -> bool {
        let urls = host.row_urls();
        if urls.is_empty() {
            return false;
        }
        if self.index.is_some_and(|i| i >= urls.len()) {
            self.index = None;
        }

        match key {
            Key::ArrowDown => {
                let next = self.index.map_or(0, |i| i + 1);
                if next < urls.len() {
                    self.move_to(host, next);
                }
                true
            }
            Key::ArrowUp => {
                if let Some(i) = self.index.filter(|&i| i > 0) {
                    self.move_to(host, i - 1);
                }
                true
            }
            Key::Enter => {
                if let Some(url) = self.index.and_then(|i| urls.get(i)) {
                    host.navigate(url);
                }
                true
            }
            _ => false,
        }
    }

    fn move_to<H: ModalHost>(&mut self, host: &mut H, row: usize) {
        if let Some(previous) = self.index {
            host.set_row_focused(previous, false);
        }
        self.index = Some(row);
        host.set_row_focused(row, true);
        host.scroll_row_into_view(row);
    }
}
