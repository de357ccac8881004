//! Lazy index loading and its failure path.

use sitefind::{
    IndexEvent, IndexLoadError, Key, ModalConfig, ModalController, ModalHost, ModalState,
};

use super::common::{self, RecordingHost, ALPHA_INDEX};

#[test]
fn test_first_open_fetches_index() {
    let mut modal = common::mount();
    modal.open();
    assert_eq!(modal.host().fetches, vec!["/index.json".to_string()]);
    assert!(modal.host().loading_visible);
    assert!(!modal.is_index_loaded());
}

#[test]
fn test_index_path_from_config() {
    let config = ModalConfig {
        index_path: "/blog/index.json".to_string(),
        ..ModalConfig::default()
    };
    let mut modal = ModalController::mount(RecordingHost::default(), config).unwrap();
    modal.open();
    assert_eq!(modal.host().fetches, vec!["/blog/index.json".to_string()]);
}

#[test]
fn test_successful_load() {
    let mut modal = common::mount();
    common::open(&mut modal);
    assert_eq!(modal.state(), ModalState::OpenLoadingIndex);

    modal.on_index_event(IndexEvent::Ready(ALPHA_INDEX.to_string()));
    assert!(modal.is_index_loaded());
    assert_eq!(modal.index().map(|i| i.len()), Some(1));
    assert!(!modal.host().loading_visible);
    assert_eq!(modal.host().listeners_attached, 1);
    assert_eq!(modal.state(), ModalState::OpenEmpty);
}

#[test]
fn test_load_completing_before_activation() {
    let mut modal = common::mount();
    modal.open();
    modal.on_index_event(IndexEvent::Ready(ALPHA_INDEX.to_string()));
    assert_eq!(modal.state(), ModalState::Opening);

    common::run_timers(&mut modal);
    assert_eq!(modal.state(), ModalState::OpenEmpty);
}

#[test]
fn test_input_before_load_is_dropped() {
    let mut modal = common::mount();
    common::open(&mut modal);
    common::type_query(&mut modal, "Alpha");
    assert!(modal.host().results_markup.is_empty());
    assert!(!modal.host().empty_visible);
    assert_eq!(modal.state(), ModalState::OpenLoadingIndex);
    assert!(!modal.on_query_key(Key::ArrowDown));
}

#[test]
fn test_http_failure_shows_inline_error() {
    let mut modal = common::mount();
    common::open(&mut modal);
    modal.on_index_event(IndexEvent::Failed(IndexLoadError::Fetch { status: 500 }));

    let host = modal.host();
    assert!(!modal.is_index_loaded());
    assert!(!host.loading_visible);
    assert_eq!(host.row_count(), 1);
    assert!(host.results_markup.contains("search-modal-error"));
    assert!(host.results_markup.contains("Failed to load search index"));
    assert_eq!(host.errors.len(), 1);
    assert!(host.errors[0].contains("500"));
    assert_eq!(host.listeners_attached, 0);
    assert_eq!(modal.state(), ModalState::OpenEmpty);
}

#[test]
fn test_error_row_is_not_navigable() {
    let mut modal = common::mount();
    common::open(&mut modal);
    modal.on_index_event(IndexEvent::Failed(IndexLoadError::Network(
        "offline".to_string(),
    )));
    assert!(!modal.on_query_key(Key::ArrowDown));
    assert_eq!(modal.focus_index(), None);
}

#[test]
fn test_malformed_body_is_a_failure() {
    let mut modal = common::mount();
    common::open(&mut modal);
    modal.on_index_event(IndexEvent::Ready("{\"title\": \"not an array\"}".to_string()));
    assert!(!modal.is_index_loaded());
    assert!(modal.host().results_markup.contains("search-modal-error"));
}

#[test]
fn test_failure_retries_on_next_open() {
    let mut modal = common::mount();
    common::open(&mut modal);
    modal.on_index_event(IndexEvent::Failed(IndexLoadError::Fetch { status: 500 }));

    common::close(&mut modal);
    common::open(&mut modal);
    assert_eq!(modal.host().fetches.len(), 2);
    assert!(modal.host().loading_visible);
    assert!(!modal.host().results_markup.contains("search-modal-error"));

    modal.on_index_event(IndexEvent::Ready(ALPHA_INDEX.to_string()));
    assert!(modal.is_index_loaded());
    common::type_query(&mut modal, "Alpha");
    assert_eq!(modal.host().row_urls(), vec!["/a".to_string()]);
}

#[test]
fn test_no_second_fetch_while_in_flight() {
    let mut modal = common::mount();
    common::open(&mut modal);
    common::close(&mut modal);
    common::open(&mut modal);
    assert_eq!(modal.host().fetches.len(), 1);

    modal.on_index_event(IndexEvent::Ready(ALPHA_INDEX.to_string()));
    assert!(modal.is_index_loaded());
}

#[test]
fn test_late_duplicate_event_ignored() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    let before = modal.host().clone();
    modal.on_index_event(IndexEvent::Failed(IndexLoadError::Fetch { status: 404 }));
    assert!(modal.is_index_loaded());
    assert_eq!(modal.host(), &before);
}

#[test]
fn test_custom_error_message_is_escaped() {
    let config = ModalConfig {
        index_error_message: "<oops>".to_string(),
        ..ModalConfig::default()
    };
    let mut modal = ModalController::mount(RecordingHost::default(), config).unwrap();
    common::open(&mut modal);
    modal.on_index_event(IndexEvent::Failed(IndexLoadError::Fetch { status: 503 }));
    assert!(modal.host().results_markup.contains("&lt;oops&gt;"));
}
