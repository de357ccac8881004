// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Modal lifecycle states.

/// Where the modal is in its lifecycle.
///
/// `Opening` covers the short gap between showing the container and marking
/// it active. Every state except `Closed` counts as open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Opening,
    OpenEmpty,
    OpenLoadingIndex,
    OpenWithResults,
    OpenNoResults,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self != ModalState::Closed
    }

    /// Open and past the activation step, so query results may change it.
    pub fn is_settled(self) -> bool {
        !matches!(self, ModalState::Closed | ModalState::Opening)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ModalState::Closed => "closed",
            ModalState::Opening => "opening",
            ModalState::OpenEmpty => "open-empty",
            ModalState::OpenLoadingIndex => "open-loading-index",
            ModalState::OpenWithResults => "open-with-results",
            ModalState::OpenNoResults => "open-no-results",
        }
    }
}

impl std::fmt::Display for ModalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
