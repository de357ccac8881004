//! Typing into the query field.

use sitefind::{ModalHost, ModalState};

use super::common::{self, rust_records_json, ALPHA_INDEX, BLOG_INDEX};

#[test]
fn test_exact_title_match() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::type_query(&mut modal, "Alpha");

    let host = modal.host();
    assert_eq!(host.row_count(), 1);
    assert!(host.results_markup.contains(r#"data-url="/a""#));
    assert!(host.results_markup.contains(r#"data-index="0""#));
    assert!(host.results_markup.contains(">Alpha<"));
    assert!(host.results_markup.contains(">first<"));
    assert!(!host.empty_visible);
    assert_eq!(modal.state(), ModalState::OpenWithResults);
}

#[test]
fn test_prefix_match() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::type_query(&mut modal, "Alp");
    assert_eq!(modal.host().row_urls(), vec!["/a".to_string()]);
}

#[test]
fn test_no_results() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::type_query(&mut modal, "zzz");

    let host = modal.host();
    assert!(host.results_markup.is_empty());
    assert!(host.empty_visible);
    assert_eq!(modal.state(), ModalState::OpenNoResults);
}

#[test]
fn test_empty_query_clears() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::type_query(&mut modal, "zzz");
    common::type_query(&mut modal, "   ");

    let host = modal.host();
    assert!(host.results_markup.is_empty());
    assert!(!host.empty_visible);
    assert_eq!(modal.state(), ModalState::OpenEmpty);
}

#[test]
fn test_query_is_trimmed() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::type_query(&mut modal, "  Alpha  ");
    assert_eq!(modal.host().row_count(), 1);
}

#[test]
fn test_results_capped_at_ten() {
    let mut modal = common::loaded_modal(&rust_records_json(25));
    common::type_query(&mut modal, "rust");

    let urls = modal.host().row_urls();
    assert_eq!(urls.len(), 10);
    assert_eq!(urls[0], "/notes/0/");
    assert_eq!(urls[9], "/notes/9/");
}

#[test]
fn test_results_are_escaped() {
    let mut modal = common::loaded_modal(BLOG_INDEX);
    common::type_query(&mut modal, "script");

    let markup = &modal.host().results_markup;
    assert!(markup.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(markup.contains("&lt;b&gt;bold&lt;/b&gt; &amp; more"));
    assert!(!markup.contains("<script>"));
    assert!(!markup.contains("<b>"));
}

#[test]
fn test_summary_omitted_when_empty() {
    let mut modal = common::loaded_modal(&rust_records_json(1));
    common::type_query(&mut modal, "rust");
    assert!(!modal.host().results_markup.contains("search-result-summary"));
}

#[test]
fn test_matches_across_fields() {
    let mut modal = common::loaded_modal(BLOG_INDEX);
    common::type_query(&mut modal, "taxonomies");
    assert_eq!(modal.host().row_urls()[0], "/posts/hugo/");

    common::type_query(&mut modal, "combinators");
    assert_eq!(modal.host().row_urls()[0], "/posts/parser/");
}

#[test]
fn test_case_insensitive() {
    let mut modal = common::loaded_modal(BLOG_INDEX);
    common::type_query(&mut modal, "HUGO");
    assert_eq!(modal.host().row_urls()[0], "/posts/hugo/");
}

#[test]
fn test_new_query_resets_focus() {
    let mut modal = common::loaded_modal(&rust_records_json(5));
    common::type_query(&mut modal, "rust");
    modal.on_query_key(sitefind::Key::ArrowDown);
    modal.on_query_key(sitefind::Key::ArrowDown);
    assert_eq!(modal.focus_index(), Some(1));

    common::type_query(&mut modal, "rust n");
    assert_eq!(modal.focus_index(), None);
    assert!(modal.host().focused_rows.is_empty());
}

#[test]
fn test_query_after_close_and_reopen() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::type_query(&mut modal, "Alpha");
    common::close(&mut modal);
    common::open(&mut modal);
    assert!(modal.host().results_markup.is_empty());

    common::type_query(&mut modal, "Alpha");
    assert_eq!(modal.state(), ModalState::OpenWithResults);
}
