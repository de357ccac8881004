// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search modal.
//!
//! Split the way the page experiences it: a host trait for the DOM, a loader
//! for the index, a renderer for rows, a cursor for the keyboard, and the
//! controller tying them into one state machine.

mod controller;
mod host;
mod loader;
mod navigator;
pub mod render;
mod state;

pub use controller::ModalController;
pub use host::{Key, KeyPress, ModalHost, ModalTimer, TimerToken};
pub use loader::{IndexEvent, IndexLoader, LoadOutcome};
pub use navigator::FocusCursor;
pub use state::ModalState;
