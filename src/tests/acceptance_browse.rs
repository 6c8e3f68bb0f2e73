//! Acceptance tests: browsing the carousel.
//!
//! Each test drives the app through the harness and checks both state and
//! rendered output.

use crate::state::{Direction, Mode, SlideSide};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::{KeyCode, MouseEventKind};

#[test]
fn browse_scenario1_pages_through_ten_events() {
    // GIVEN: The ten bundled events, four per page
    // WHEN: The user presses → three times
    // THEN: Pages go 1, 2, 2; the last press is absorbed at the end
    let mut harness = AcceptanceTestHarness::bundled().expect("bundled catalog loads");

    let mut pages = Vec::new();
    for _ in 0..3 {
        harness.send_key(KeyCode::Right);
        pages.push(harness.state().discovery.paging().page_index);
    }

    assert_eq!(pages, vec![1, 2, 2]);
    let output = harness.render_to_string();
    assert!(output.contains("3/3"), "got:\n{output}");
    assert!(output.contains("Juhu Beach"));
}

#[test]
fn browse_scenario2_back_at_first_page_keeps_direction() {
    // GIVEN: The carousel on its first page, never moved
    // WHEN: The user presses ←
    // THEN: Nothing changes, including the slide direction
    let mut harness = AcceptanceTestHarness::bundled().unwrap();

    harness.send_key(KeyCode::Left);

    let paging = harness.state().discovery.paging();
    assert_eq!(paging.page_index, 0);
    assert_eq!(paging.direction, None);
}

#[test]
fn browse_scenario3_clamp_at_end_keeps_forward_direction() {
    // GIVEN: The carousel on its last page after moving forward
    // WHEN: The user tries to go further
    // THEN: The direction stays Forward (the entry animation is unchanged)
    let mut harness = AcceptanceTestHarness::bundled().unwrap();
    harness.send_keys(&[KeyCode::Right, KeyCode::Right]);

    harness.send_key(KeyCode::Right);

    let paging = harness.state().discovery.paging();
    assert_eq!(paging.page_index, 2);
    assert_eq!(paging.direction, Some(Direction::Forward));
    assert_eq!(paging.enter_side(), Some(SlideSide::Right));
}

#[test]
fn browse_scenario4_backward_page_enters_from_left() {
    let mut harness = AcceptanceTestHarness::bundled().unwrap();
    harness.send_keys(&[KeyCode::Right, KeyCode::Left]);

    let paging = harness.state().discovery.paging();
    assert_eq!(paging.page_index, 0);
    assert_eq!(paging.enter_side(), Some(SlideSide::Left));
    assert!(harness.render_to_string().contains("1/3 ▸▸"));
}

#[test]
fn browse_scenario5_mouse_wheel_pages_but_trackpad_swipe_does_not() {
    // GIVEN: The first page
    // WHEN: A vertical wheel notch up arrives, then a horizontal scroll
    // THEN: The first pages forward, the second passes through
    let mut harness = AcceptanceTestHarness::bundled().unwrap();

    harness.scroll(MouseEventKind::ScrollUp);
    assert_eq!(harness.state().discovery.paging().page_index, 1);

    harness.scroll(MouseEventKind::ScrollRight);
    assert_eq!(harness.state().discovery.paging().page_index, 1);

    harness.scroll(MouseEventKind::ScrollDown);
    assert_eq!(harness.state().discovery.paging().page_index, 0);
}

#[test]
fn browse_scenario6_select_and_open_card() {
    // GIVEN: The second page
    // WHEN: The user tabs to the third card and presses Enter
    // THEN: The status line shows that card's route
    let mut harness = AcceptanceTestHarness::bundled().unwrap();
    harness.send_keys(&[
        KeyCode::Right,
        KeyCode::Tab,
        KeyCode::Tab,
        KeyCode::Enter,
    ]);

    let opened = harness.state().opened.as_ref().map(|i| i.route());
    assert_eq!(opened.as_deref(), Some("/event/bandra-bootcamp"));
    assert!(harness
        .render_to_string()
        .ends_with("Opened /event/bandra-bootcamp"));
}

#[test]
fn browse_scenario7_page_change_resets_card_cursor() {
    let mut harness = AcceptanceTestHarness::bundled().unwrap();
    harness.send_keys(&[KeyCode::Tab, KeyCode::Tab, KeyCode::Right]);

    assert_eq!(harness.state().discovery.selected_index(), 0);
}

#[test]
fn browse_scenario8_click_card_opens_it() {
    let mut harness = AcceptanceTestHarness::bundled().unwrap();

    // Fourth card spans columns 60..80
    harness.click_at(65, 6);

    let opened = harness.state().opened.as_ref().map(|i| i.route());
    assert_eq!(opened.as_deref(), Some("/event/marine-drive-5k"));
    assert_eq!(harness.state().discovery.mode(), Mode::Browsing);
}

#[test]
fn browse_scenario9_quit_stops_harness() {
    let mut harness = AcceptanceTestHarness::bundled().unwrap();
    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
}
