// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result rows under hostile index content.
//!
//! Titles, summaries and permalinks are interpolated into markup. Whatever
//! bytes an index carries, the rendered row must not contain a raw tag or
//! break out of its `data-url` attribute.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sitefind::modal::render::row_markup;
use sitefind::{escape_html, MatchResult, SearchRecord};

#[derive(Debug, Arbitrary)]
struct Row {
    title: String,
    permalink: String,
    summary: String,
}

fuzz_target!(|row: Row| {
    for field in [&row.title, &row.permalink, &row.summary] {
        let escaped = escape_html(field);
        assert!(!escaped.contains(['<', '>', '"', '\'']));
    }

    let result = MatchResult {
        record: SearchRecord {
            title: row.title,
            permalink: row.permalink,
            summary: row.summary,
            content: String::new(),
        },
        rank: 0.0,
        position: 0,
    };
    let markup = row_markup(&result, 0);

    // Exactly the tags the renderer writes itself
    assert_eq!(markup.matches('<').count(), markup.matches('>').count());
    assert_eq!(markup.matches("<li").count(), 1);
    assert_eq!(markup.matches('"').count() % 2, 0);
});
