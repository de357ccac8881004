// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Options for both controllers.
//!
//! Every field has a default, so the JS side can pass `{}` (or nothing) and
//! override only what its theme needs. The delays must match the CSS
//! transition durations of the theme's stylesheet.

use serde::Deserialize;

use crate::fuzzy::FuzzyOptions;
use crate::index::DEFAULT_RESULT_LIMIT;

/// Delay between showing the container and marking it active, so the CSS
/// transition has a frame to engage.
pub const OPEN_DELAY_MS: u32 = 10;

/// Duration of the closing transition; the container is hidden after it.
pub const TRANSITION_MS: u32 = 200;

/// Search modal options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModalConfig {
    /// Where the site generator publishes the index.
    pub index_path: String,
    /// Maximum rows rendered per query.
    pub result_limit: usize,
    pub open_delay_ms: u32,
    pub close_delay_ms: u32,
    /// Inline row shown when the index cannot be loaded.
    pub index_error_message: String,
    pub fuzzy: FuzzyOptions,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            index_path: "/index.json".to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
            open_delay_ms: OPEN_DELAY_MS,
            close_delay_ms: TRANSITION_MS,
            index_error_message: "Failed to load search index".to_string(),
            fuzzy: FuzzyOptions::default(),
        }
    }
}

/// Smart header options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderConfig {
    /// Minimum scroll delta (px) that counts as a direction change.
    pub scroll_threshold: f64,
    /// Offset (px) below which scrolling down never hides the header.
    pub hide_after: f64,
    /// Quiet time (ms) after which a hidden header comes back.
    pub idle_reveal_ms: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: 10.0,
            hide_after: 100.0,
            idle_reveal_ms: 3000,
        }
    }
}
