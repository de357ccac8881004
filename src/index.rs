// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loaded search index and the query engine over it.
//!
//! Built once from the site's `index.json`, then queried on every keystroke.
//! Field text is normalized and split into chars up front so a query only pays
//! for the DP, never for re-normalizing a few hundred posts.

use tracing::debug;

use crate::error::IndexLoadError;
use crate::fuzzy::{combine_field_scores, field_norm, field_score, FuzzyOptions};
use crate::types::{FieldKey, MatchResult, SearchRecord};
use crate::utils::normalize;

/// Default cap on results per query.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// One searchable field, pre-normalized.
#[derive(Debug, Clone)]
struct PreparedField {
    chars: Vec<char>,
    norm: f64,
}

/// Records plus everything needed to fuzzy-match them.
///
/// Immutable once built. A page session owns at most one of these.
#[derive(Debug, Clone)]
pub struct SearchIndexHandle {
    records: Vec<SearchRecord>,
    /// `prepared[doc][k]` is the field `options.keys[k]` of record `doc`.
    prepared: Vec<Vec<PreparedField>>,
    options: FuzzyOptions,
}

impl SearchIndexHandle {
    /// Build the handle from already-parsed records.
    pub fn new(records: Vec<SearchRecord>, options: FuzzyOptions) -> Self {
        let prepared = records
            .iter()
            .map(|record| {
                options
                    .keys
                    .iter()
                    .map(|&key| prepare_field(record.field(key)))
                    .collect()
            })
            .collect();

        debug!(records = records.len(), "built search index");
        Self {
            records,
            prepared,
            options,
        }
    }

    /// Parse a JSON array of records and build the handle.
    pub fn from_json(body: &str, options: FuzzyOptions) -> Result<Self, IndexLoadError> {
        let records: Vec<SearchRecord> = serde_json::from_str(body)?;
        Ok(Self::new(records, options))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    pub fn options(&self) -> &FuzzyOptions {
        &self.options
    }

    /// Ranked matches for `query`, best first, at most `limit` of them.
    ///
    /// The query should already be trimmed; a query that normalizes to nothing
    /// matches nothing. Equal ranks keep index order.
    pub fn search(&self, query: &str, limit: usize) -> Vec<MatchResult> {
        let pattern: Vec<char> = normalize(query).chars().collect();
        if pattern.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut hits: Vec<(f64, usize)> = self
            .prepared
            .iter()
            .enumerate()
            .filter_map(|(position, fields)| {
                let scores = fields.iter().filter_map(|field| {
                    field_score(&pattern, &field.chars, &self.options)
                        .map(|score| (score, field.norm))
                });
                combine_field_scores(scores).map(|rank| (rank, position))
            })
            .collect();

        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        hits.truncate(limit);

        hits.into_iter()
            .map(|(rank, position)| MatchResult {
                record: self.records[position].clone(),
                rank,
                position,
            })
            .collect()
    }

    /// Which configured keys this handle searches.
    pub fn keys(&self) -> &[FieldKey] {
        &self.options.keys
    }
}

fn prepare_field(raw: &str) -> PreparedField {
    let normalized = normalize(raw);
    PreparedField {
        norm: field_norm(&normalized),
        chars: normalized.chars().collect(),
    }
}
