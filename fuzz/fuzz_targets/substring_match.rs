// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring matching.
//!
//! The matcher decides whether a record shows up at all. It must respect its
//! error budget, report locations inside the text, and always find a pattern
//! that occurs verbatim.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitefind::fuzzy::best_substring_match;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    max_errors: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: Vec<char> = input.pattern.chars().take(32).collect();
    let text: Vec<char> = input.text.chars().take(256).collect();
    let max_errors = usize::from(input.max_errors % 16);

    if let Some(found) = best_substring_match(&pattern, &text, max_errors) {
        assert!(found.errors <= max_errors);
        assert!(found.location <= text.len());
    }

    // A slice of the text is always an exact match
    if text.len() >= 2 {
        let slice = &text[text.len() / 2..];
        let found = best_substring_match(slice, &text, 0);
        assert_eq!(found.map(|m| m.errors), Some(0));
    }
});
