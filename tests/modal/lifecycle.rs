//! Open, close and the timers in between.

use sitefind::{
    IndexEvent, Key, KeyPress, ModalConfig, ModalController, ModalState, ModalTimer,
};

use super::common::{self, RecordingHost, ALPHA_INDEX};

#[test]
fn test_mount_requires_elements() {
    let host = RecordingHost {
        missing_elements: true,
        ..RecordingHost::default()
    };
    assert!(ModalController::mount(host, ModalConfig::default()).is_none());
}

#[test]
fn test_mount_starts_closed() {
    let modal = common::mount();
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(!modal.is_open());
    assert_eq!(modal.focus_index(), None);
    assert!(modal.host().fetches.is_empty(), "index must not load before first open");
}

#[test]
fn test_open_shows_then_activates() {
    let mut modal = common::mount();
    modal.open();

    let host = modal.host();
    assert!(host.container_visible);
    assert!(!host.active, "active only after the activation delay");
    assert!(host.scroll_locked);
    assert!(!host.aria_hidden);
    assert_eq!(host.timers.len(), 1);
    assert_eq!(host.timers[0].0, 10);
    assert_eq!(host.timers[0].1.kind, ModalTimer::Activate);
    assert_eq!(modal.state(), ModalState::Opening);

    common::run_timers(&mut modal);
    assert!(modal.host().active);
    assert!(modal.host().input_focused);
    assert_eq!(modal.state(), ModalState::OpenLoadingIndex);
}

#[test]
fn test_open_twice_is_single_open() {
    let mut modal = common::mount();
    modal.open();
    let after_first = modal.host().clone();

    modal.open();
    assert_eq!(modal.host(), &after_first);
    assert_eq!(modal.host().fetches.len(), 1);
}

#[test]
fn test_close_restores_page_then_hides() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::type_query(&mut modal, "Alpha");

    modal.close();
    {
        let host = modal.host();
        assert!(!host.active);
        assert!(!host.scroll_locked);
        assert!(host.aria_hidden);
        assert!(host.container_visible, "hidden only after the transition");
        assert_eq!(host.timers.last().map(|t| t.0), Some(200));
    }
    assert_eq!(modal.state(), ModalState::Closed);

    common::run_timers(&mut modal);
    let host = modal.host();
    assert!(!host.container_visible);
    assert!(host.input_value.is_empty());
    assert!(host.results_markup.is_empty());
    assert!(!host.empty_visible);
    assert_eq!(modal.focus_index(), None);
}

#[test]
fn test_close_when_closed_is_noop() {
    let mut modal = common::mount();
    modal.close();
    assert_eq!(modal.host(), &RecordingHost::default());
}

#[test]
fn test_reopen_during_close_keeps_modal_visible() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::type_query(&mut modal, "Alpha");

    modal.close();
    modal.open();
    common::run_timers(&mut modal);

    let host = modal.host();
    assert!(host.container_visible, "stale hide timer must not hide the reopened modal");
    assert!(host.active);
    assert!(host.results_markup.is_empty(), "reopened modal starts clean");
    assert!(host.input_value.is_empty());
    assert_eq!(modal.state(), ModalState::OpenEmpty);
}

#[test]
fn test_close_during_opening_cancels_activation() {
    let mut modal = common::mount();
    modal.open();
    modal.close();
    common::run_timers(&mut modal);

    assert!(!modal.host().active);
    assert!(!modal.host().container_visible);
    assert_eq!(modal.state(), ModalState::Closed);
}

#[test]
fn test_toggle() {
    let mut modal = common::mount();
    modal.toggle();
    assert!(modal.is_open());
    modal.toggle();
    assert!(!modal.is_open());
}

#[test]
fn test_shortcut_opens() {
    let mut modal = common::mount();
    assert!(!modal.on_global_key(KeyPress::plain(Key::Slash)));
    assert!(!modal.is_open());

    assert!(modal.on_global_key(KeyPress::alt(Key::Slash)));
    assert!(modal.is_open());
}

#[test]
fn test_escape_closes_open_modal() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    assert!(modal.on_global_key(KeyPress::plain(Key::Escape)));
    assert_eq!(modal.state(), ModalState::Closed);
    assert!(!modal.host().scroll_locked);

    common::run_timers(&mut modal);
    assert!(!modal.host().container_visible);
    assert!(modal.host().results_markup.is_empty());
    assert!(modal.host().input_value.is_empty());
}

#[test]
fn test_escape_when_closed_is_ignored() {
    let mut modal = common::mount();
    assert!(!modal.on_global_key(KeyPress::plain(Key::Escape)));
    assert_eq!(modal.host(), &RecordingHost::default());
}

#[test]
fn test_open_close_cycles_load_once() {
    let mut modal = common::mount();
    common::open(&mut modal);
    modal.on_index_event(IndexEvent::Ready(ALPHA_INDEX.to_string()));
    for _ in 0..3 {
        common::close(&mut modal);
        common::open(&mut modal);
    }
    assert_eq!(modal.host().fetches, vec!["/index.json".to_string()]);
    assert_eq!(modal.host().listeners_attached, 1);
    assert_eq!(modal.state(), ModalState::OpenEmpty);
}

#[test]
fn test_custom_delays() {
    let config = ModalConfig {
        open_delay_ms: 0,
        close_delay_ms: 350,
        ..ModalConfig::default()
    };
    let mut modal = ModalController::mount(RecordingHost::default(), config).unwrap();
    modal.open();
    assert_eq!(modal.host().timers[0].0, 0);
    common::run_timers(&mut modal);
    modal.close();
    assert_eq!(modal.host().timers[0].0, 350);
}

#[test]
fn test_input_while_closed_is_ignored() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::close(&mut modal);

    common::type_query(&mut modal, "Alpha");
    assert!(modal.host().results_markup.is_empty());
    assert!(!modal.host().empty_visible);
    assert!(!modal.on_query_key(Key::ArrowDown));
    assert_eq!(modal.focus_index(), None);

    common::open(&mut modal);
    assert!(modal.host().results_markup.is_empty(), "reopened modal starts clean");
    assert_eq!(modal.state(), ModalState::OpenEmpty);
}

#[test]
fn test_input_while_opening_is_ignored() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::close(&mut modal);
    modal.open();

    common::type_query(&mut modal, "Alpha");
    common::run_timers(&mut modal);
    assert!(!modal.on_query_key(Key::ArrowDown));

    assert_eq!(modal.state(), ModalState::OpenEmpty);
    assert!(modal.host().results_markup.is_empty());
    assert_eq!(modal.focus_index(), None);
}

#[test]
fn test_input_during_close_transition_is_ignored() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    modal.close();
    common::type_query(&mut modal, "Alpha");
    assert!(modal.host().results_markup.is_empty());
}
