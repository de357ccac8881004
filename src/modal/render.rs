// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result rows: matches in, escaped markup out.
//!
//! Titles, summaries and URLs come from the index, which is untrusted input
//! as far as the page is concerned. Everything interpolated into markup goes
//! through [`escape_html`] first.

use super::host::ModalHost;
use crate::types::MatchResult;
use crate::utils::escape_html;

/// Markup for one result row.
///
/// Carries the destination in `data-url` and the ordinal in `data-index`.
/// The summary block is omitted when the record has no summary.
pub fn row_markup(result: &MatchResult, index: usize) -> String {
    let record = &result.record;
    let mut row = format!(
        r#"<li data-url="{}" data-index="{}" role="option"><div class="search-result-title">{}</div>"#,
        escape_html(&record.permalink),
        index,
        escape_html(&record.title),
    );
    if !record.summary.is_empty() {
        row.push_str(r#"<div class="search-result-summary">"#);
        row.push_str(&escape_html(&record.summary));
        row.push_str("</div>");
    }
    row.push_str("</li>");
    row
}

/// Markup for a whole result set.
pub fn results_markup(results: &[MatchResult]) -> String {
    results
        .iter()
        .enumerate()
        .map(|(index, result)| row_markup(result, index))
        .collect()
}

/// The single inline row shown when the index failed to load.
///
/// It has no `data-url`, so the keyboard navigator never counts it.
pub fn error_markup(message: &str) -> String {
    format!(
        r#"<li class="search-modal-error">{}</li>"#,
        escape_html(message)
    )
}

/// Draw `results` into the page. Returns the number of rows rendered.
///
/// An empty set clears the list and shows the "no results" indicator;
/// otherwise the indicator is hidden before the rows go in.
pub fn render<H: ModalHost>(host: &mut H, results: &[MatchResult]) -> usize {
    host.set_empty_visible(false);
    if results.is_empty() {
        host.set_results_markup("");
        host.set_empty_visible(true);
        return 0;
    }
    host.set_results_markup(&results_markup(results));
    results.len()
}
