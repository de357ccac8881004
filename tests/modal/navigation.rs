//! Arrow keys, Enter and clicks over the rendered rows.

use sitefind::Key;

use super::common::{self, rust_records_json, TestModal, ALPHA_INDEX};

fn five_rows() -> TestModal {
    let mut modal = common::loaded_modal(&rust_records_json(5));
    common::type_query(&mut modal, "rust");
    assert_eq!(modal.host().row_count(), 5);
    modal
}

#[test]
fn test_arrow_down_walks_rows() {
    for presses in 1..=5 {
        let mut modal = five_rows();
        for _ in 0..presses {
            assert!(modal.on_query_key(Key::ArrowDown));
        }
        assert_eq!(modal.focus_index(), Some(presses - 1));
        assert_eq!(modal.cursor().as_dom_index(), presses as i32 - 1);
        assert_eq!(
            modal.host().focused_rows.iter().copied().collect::<Vec<_>>(),
            vec![presses - 1]
        );
    }
}

#[test]
fn test_arrow_down_stops_at_last_row() {
    let mut modal = five_rows();
    for _ in 0..8 {
        modal.on_query_key(Key::ArrowDown);
    }
    assert_eq!(modal.focus_index(), Some(4));
}

#[test]
fn test_arrow_up_stops_at_first_row() {
    let mut modal = five_rows();
    modal.on_query_key(Key::ArrowDown);
    modal.on_query_key(Key::ArrowDown);
    assert!(modal.on_query_key(Key::ArrowUp));
    assert_eq!(modal.focus_index(), Some(0));
    assert!(modal.on_query_key(Key::ArrowUp));
    assert_eq!(modal.focus_index(), Some(0));
}

#[test]
fn test_arrow_up_with_nothing_focused() {
    let mut modal = five_rows();
    assert!(modal.on_query_key(Key::ArrowUp));
    assert_eq!(modal.focus_index(), None);
    assert!(modal.host().focused_rows.is_empty());
}

#[test]
fn test_focus_scrolls_into_view() {
    let mut modal = five_rows();
    modal.on_query_key(Key::ArrowDown);
    modal.on_query_key(Key::ArrowDown);
    assert_eq!(modal.host().scrolled_to, vec![0, 1]);
}

#[test]
fn test_enter_navigates_to_focused_row() {
    let mut modal = five_rows();
    modal.on_query_key(Key::ArrowDown);
    modal.on_query_key(Key::ArrowDown);
    assert!(modal.on_query_key(Key::Enter));
    assert_eq!(modal.host().navigations, vec!["/notes/1/".to_string()]);
}

#[test]
fn test_enter_without_focus_does_nothing() {
    let mut modal = five_rows();
    assert!(modal.on_query_key(Key::Enter));
    assert!(modal.host().navigations.is_empty());
}

#[test]
fn test_keys_ignored_without_rows() {
    let mut modal = common::loaded_modal(ALPHA_INDEX);
    common::type_query(&mut modal, "zzz");
    assert!(!modal.on_query_key(Key::ArrowDown));
    assert!(!modal.on_query_key(Key::Enter));
    assert_eq!(modal.focus_index(), None);
}

#[test]
fn test_other_keys_pass_through() {
    let mut modal = five_rows();
    assert!(!modal.on_query_key(Key::Other));
    assert!(!modal.on_query_key(Key::Slash));
    assert_eq!(modal.focus_index(), None);
}

#[test]
fn test_click_navigates() {
    let mut modal = five_rows();
    modal.activate(3);
    assert_eq!(modal.host().navigations, vec!["/notes/3/".to_string()]);

    modal.activate(42);
    assert_eq!(modal.host().navigations.len(), 1);
}

#[test]
fn test_close_resets_cursor() {
    let mut modal = five_rows();
    modal.on_query_key(Key::ArrowDown);
    common::close(&mut modal);
    assert_eq!(modal.focus_index(), None);
    assert_eq!(modal.cursor().as_dom_index(), -1);
}
