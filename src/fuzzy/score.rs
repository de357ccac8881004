// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning edit errors into ranks.
//!
//! A field's score is the fraction of the query that had to be edited, plus a
//! location penalty when location matters. Scores live in `[0, 1]`-ish and a
//! field only counts as a match when its score is at most `threshold`.
//!
//! A record's rank multiplies the scores of every matching field, each raised
//! to that field's length norm. Short fields get a norm near 1, long bodies a
//! norm near 0, so a typo in a title hurts more than a typo buried in content,
//! and matching in several fields pulls the rank further towards zero.

use serde::Deserialize;

use super::levenshtein::best_substring_match;
use crate::types::FieldKey;

/// Floor for every match short of the whole field.
pub const MIN_MATCH_SCORE: f64 = 0.001;

/// Knobs for the fuzzy matcher.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuzzyOptions {
    /// How far from the start of a field a match may drift before the
    /// location penalty reaches a full point. Ignored with `ignore_location`.
    pub distance: usize,
    /// Highest field score that still counts as a match (0 = exact only).
    pub threshold: f64,
    /// Score matches purely on edit errors, wherever they occur.
    pub ignore_location: bool,
    /// Record fields searched, in order.
    pub keys: Vec<FieldKey>,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            distance: 100,
            threshold: 0.4,
            ignore_location: true,
            keys: FieldKey::ALL.to_vec(),
        }
    }
}

impl FuzzyOptions {
    /// Most edits a pattern of `pattern_len` chars may need and still match.
    pub fn max_errors(&self, pattern_len: usize) -> usize {
        let budget = (self.threshold.max(0.0) * pattern_len as f64).floor() as usize;
        budget.min(pattern_len)
    }
}

/// Score of one normalized field against one normalized pattern.
///
/// `None` means the field does not match. Only a field equal to the whole
/// pattern scores 0; any other match scores at least [`MIN_MATCH_SCORE`], so
/// "rust" ranks a post titled "Rust" above one titled "Rust ownership".
pub fn field_score(pattern: &[char], text: &[char], options: &FuzzyOptions) -> Option<f64> {
    if !pattern.is_empty() && pattern == text {
        return Some(0.0);
    }
    let found = best_substring_match(pattern, text, options.max_errors(pattern.len()))?;
    let accuracy = found.errors as f64 / pattern.len() as f64;

    let score = if options.ignore_location {
        accuracy
    } else if options.distance == 0 {
        if found.location == 0 {
            accuracy
        } else {
            1.0
        }
    } else {
        accuracy + found.location as f64 / options.distance as f64
    };

    (score <= options.threshold).then_some(score.max(MIN_MATCH_SCORE))
}

/// Length norm of a field: `1/sqrt(tokens)`, rounded to three decimals.
pub fn field_norm(text: &str) -> f64 {
    let tokens = text.split(' ').filter(|t| !t.is_empty()).count().max(1);
    (1000.0 / (tokens as f64).sqrt()).round() / 1000.0
}

/// Combine `(score, norm)` pairs of the matching fields into a record rank.
///
/// Returns `None` when no field matched.
pub fn combine_field_scores(fields: impl IntoIterator<Item = (f64, f64)>) -> Option<f64> {
    let mut rank: Option<f64> = None;
    for (score, norm) in fields {
        let factor = score.max(f64::EPSILON).powf(norm);
        rank = Some(rank.unwrap_or(1.0) * factor);
    }
    rank
}
