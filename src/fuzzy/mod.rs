// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two layers here: an approximate substring matcher that finds where a query
//! lands inside a field with the fewest edits, and the scoring that turns
//! those edits (and optionally the match location) into a rank.

mod levenshtein;
mod score;

pub use levenshtein::{best_substring_match, SubstringMatch};
pub use score::{combine_field_scores, field_norm, field_score, FuzzyOptions, MIN_MATCH_SCORE};
