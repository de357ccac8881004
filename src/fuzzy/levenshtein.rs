// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching with a bounded error budget.
//!
//! Plain Levenshtein compares whole strings, which is useless for "does this
//! three-letter query appear somewhere in a 2000-word post". Here the first DP
//! row is all zeros, so a match may start anywhere in the text for free
//! (Sellers' variant). One column of the DP is kept per text character, giving
//! O(pattern × text) time and O(pattern) space.
//!
//! Both inputs are char slices so offsets are Unicode scalar positions, never
//! byte positions.

/// Where the pattern landed and how many edits it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstringMatch {
    /// Edit errors of the best occurrence.
    pub errors: usize,
    /// Approximate start of that occurrence (its end minus the pattern length).
    pub location: usize,
}

/// Best occurrence of `pattern` in `text` within `max_errors` edits.
///
/// Ties are resolved towards the earliest occurrence. Returns `None` when no
/// occurrence fits the budget, or when the pattern is empty.
pub fn best_substring_match(
    pattern: &[char],
    text: &[char],
    max_errors: usize,
) -> Option<SubstringMatch> {
    let m = pattern.len();
    if m == 0 || text.is_empty() {
        return None;
    }

    // Early-exit: even a perfect alignment of the whole text costs this much
    if m.saturating_sub(text.len()) > max_errors {
        return None;
    }

    let mut column: Vec<usize> = (0..=m).collect();
    let mut best: Option<(usize, usize)> = None;

    for (j, &tc) in text.iter().enumerate() {
        let mut diagonal = column[0];
        column[0] = 0;
        for i in 1..=m {
            let above = column[i];
            let cost = usize::from(pattern[i - 1] != tc);
            column[i] = (above + 1).min(column[i - 1] + 1).min(diagonal + cost);
            diagonal = above;
        }

        let errors = column[m];
        if errors <= max_errors && best.map_or(true, |(e, _)| errors < e) {
            best = Some((errors, j));
            if errors == 0 {
                break;
            }
        }
    }

    best.map(|(errors, end)| SubstringMatch {
        errors,
        location: (end + 1).saturating_sub(m),
    })
}
