// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What is actually in an index.

use std::collections::HashSet;

use crate::types::{FieldKey, SearchRecord};

/// Coverage numbers for one loaded index.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSummary {
    pub records: usize,
    /// Records with a non-empty value, per field, in [`FieldKey::ALL`] order.
    pub filled: [(FieldKey, usize); 4],
    /// Permalinks that appear more than once, in first-seen order.
    pub duplicate_permalinks: Vec<String>,
    pub total_content_chars: usize,
}

impl IndexSummary {
    pub fn of(records: &[SearchRecord]) -> Self {
        let filled = FieldKey::ALL.map(|key| {
            let count = records.iter().filter(|r| !r.field(key).is_empty()).count();
            (key, count)
        });

        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for record in records.iter().filter(|r| !r.permalink.is_empty()) {
            if !seen.insert(record.permalink.as_str())
                && !duplicates.contains(&record.permalink)
            {
                duplicates.push(record.permalink.clone());
            }
        }

        Self {
            records: records.len(),
            filled,
            duplicate_permalinks: duplicates,
            total_content_chars: records.iter().map(|r| r.content.chars().count()).sum(),
        }
    }

    /// Records that can never be navigated to.
    pub fn missing_permalinks(&self) -> usize {
        self.records - self.filled[1].1
    }
}
