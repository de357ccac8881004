// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index bodies and queries from anywhere.
//!
//! The index is whatever the server returned. Parsing must fail with an error,
//! never a panic, and a parsed index must answer any query within the limit.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitefind::{FuzzyOptions, SearchIndexHandle};

#[derive(Debug, Arbitrary)]
struct Input {
    body: String,
    query: String,
    limit: u8,
}

fuzz_target!(|input: Input| {
    let Ok(index) = SearchIndexHandle::from_json(&input.body, FuzzyOptions::default()) else {
        return;
    };

    // Cap the query to keep each run fast
    let query: String = input.query.chars().take(32).collect();
    let limit = usize::from(input.limit);
    let results = index.search(query.trim(), limit);

    assert!(results.len() <= limit);
    for pair in results.windows(2) {
        assert!(pair[0].rank <= pair[1].rank);
    }
    for result in &results {
        assert!(result.position < index.len());
    }
});
