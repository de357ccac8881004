// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What the modal needs from the page.
//!
//! The controller never touches the DOM. Everything visible goes through
//! [`ModalHost`], and the two asynchronous things (timers and the index
//! fetch) are requests the host answers later by calling back into the
//! controller with [`TimerToken`]s or an [`IndexEvent`](super::IndexEvent).

/// Which choreography step a timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTimer {
    /// Mark the shown container active and focus the input.
    Activate,
    /// Hide the container and wipe its contents after the close transition.
    Hide,
}

/// A timer request, handed back verbatim when it fires.
///
/// `generation` is the controller's open/close counter at scheduling time.
/// A token from an older generation is stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    pub kind: ModalTimer,
    pub generation: u64,
}

impl TimerToken {
    /// Pack into one integer for hosts that can only carry numbers.
    /// The low bit is the kind, the rest is the generation.
    pub fn to_bits(self) -> u64 {
        let kind = match self.kind {
            ModalTimer::Activate => 0,
            ModalTimer::Hide => 1,
        };
        (self.generation << 1) | kind
    }

    pub fn from_bits(bits: u64) -> Self {
        Self {
            kind: if bits & 1 == 0 {
                ModalTimer::Activate
            } else {
                ModalTimer::Hide
            },
            generation: bits >> 1,
        }
    }
}

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Slash,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowDown" => Key::ArrowDown,
            "ArrowUp" => Key::ArrowUp,
            "Enter" => Key::Enter,
            "Escape" => Key::Escape,
            "/" => Key::Slash,
            _ => Key::Other,
        }
    }
}

/// A key plus the modifier the global shortcut cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub alt: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, alt: false }
    }

    pub fn alt(key: Key) -> Self {
        Self { key, alt: true }
    }

    /// The page-wide open shortcut, `Alt+/`.
    pub fn is_open_shortcut(&self) -> bool {
        self.alt && self.key == Key::Slash
    }
}

/// The DOM contract of the search modal.
///
/// Implementations translate each call into DOM mutations on the modal
/// container, query input, results list, loading and empty indicators.
/// Calls are idempotent: setting a state the page already has is harmless.
pub trait ModalHost {
    /// Container, query input and results list all exist.
    fn has_required_elements(&self) -> bool;

    fn set_container_visible(&mut self, visible: bool);

    /// Toggle the "active" marker that drives the open/close transition.
    fn set_active(&mut self, active: bool);

    fn focus_input(&mut self);

    fn clear_input(&mut self);

    /// Disable (or restore) page scrolling behind the modal.
    fn set_scroll_locked(&mut self, locked: bool);

    fn set_aria_hidden(&mut self, hidden: bool);

    fn set_loading_visible(&mut self, visible: bool);

    fn set_empty_visible(&mut self, visible: bool);

    /// Replace the results list contents with already-escaped markup.
    fn set_results_markup(&mut self, markup: &str);

    /// Destination URLs of the rows currently in the results list, in order.
    ///
    /// Read fresh on every call; rows without a destination are not counted.
    fn row_urls(&self) -> Vec<String>;

    fn set_row_focused(&mut self, row: usize, focused: bool);

    /// Scroll a row into view (smooth, nearest edge).
    fn scroll_row_into_view(&mut self, row: usize);

    /// Full-page navigation.
    fn navigate(&mut self, url: &str);

    /// Start fetching the index; the result comes back as an `IndexEvent`.
    fn fetch_index(&mut self, path: &str);

    /// Fire `token` back into the controller after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32, token: TimerToken);

    /// Start forwarding query input and query-field keys to the controller.
    fn attach_query_listeners(&mut self);

    /// Console-level diagnostic. Defaults to nothing.
    fn log_error(&mut self, _message: &str) {}
}
