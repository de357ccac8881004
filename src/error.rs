// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Why the search index could not be loaded.
//!
//! Every variant ends the same way for the user: one inline message row and
//! a fresh attempt on the next modal open. The variants exist for the logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexLoadError {
    /// The server answered with a non-success status.
    #[error("index request failed with HTTP status {status}")]
    Fetch { status: u16 },

    /// The request never produced a response (offline, CORS, aborted).
    #[error("index request failed: {0}")]
    Network(String),

    /// The body was not a JSON array of records.
    #[error("index is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
