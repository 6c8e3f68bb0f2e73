//! Tests for discovery screen layout and rendering.

use super::*;
use crate::model::{Catalog, NavigationIntent, Slug};
use crate::source::CatalogSource;
use crate::state::{DiscoveryState, Direction as PageDirection};
use crate::test_harness::buffer_to_string;
use crate::view::styles::ColorConfig;
use ratatui::backend::TestBackend;
use ratatui::style::Modifier;
use ratatui::Terminal;

// ===== Test Helpers =====

const FRAME: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn bundled_state() -> AppState {
    let catalog = CatalogSource::Bundled.load().unwrap();
    AppState::new(DiscoveryState::new(catalog, 4).unwrap())
}

fn render(state: &AppState) -> Terminal<TestBackend> {
    let styles = Styles::with_color_config(ColorConfig::disabled());
    let mut terminal = Terminal::new(TestBackend::new(FRAME.width, FRAME.height)).unwrap();
    terminal
        .draw(|frame| {
            let screen = calculate_screen_layout(frame.area(), state);
            render_screen(frame, state, &screen, &styles);
        })
        .unwrap();
    terminal
}

fn rendered_text(state: &AppState) -> String {
    buffer_to_string(render(state).backend().buffer())
}

// ===== Geometry =====

#[test]
fn screen_layout_stacks_heading_search_body_status() {
    let screen = calculate_screen_layout(FRAME, &bundled_state());

    assert_eq!(screen.heading.y, 0);
    assert_eq!(screen.search, Rect::new(0, 1, 80, 3));
    assert_eq!(screen.body, Rect::new(0, 4, 80, 19));
    assert_eq!(screen.status, Rect::new(0, 23, 80, 1));
    assert_eq!(screen.next_control.x + screen.next_control.width, 80);
    assert!(screen.prev_control.x < screen.next_control.x);
}

#[test]
fn carousel_has_one_column_per_page_slot() {
    let screen = calculate_screen_layout(FRAME, &bundled_state());

    assert_eq!(screen.cards.first_index, 0);
    assert_eq!(
        screen.cards.areas,
        vec![
            Rect::new(0, 4, 20, CAROUSEL_CARD_MAX_HEIGHT),
            Rect::new(20, 4, 20, CAROUSEL_CARD_MAX_HEIGHT),
            Rect::new(40, 4, 20, CAROUSEL_CARD_MAX_HEIGHT),
            Rect::new(60, 4, 20, CAROUSEL_CARD_MAX_HEIGHT),
        ]
    );
}

#[test]
fn short_last_page_keeps_card_width() {
    let mut state = bundled_state();
    state.discovery.navigate(PageDirection::Forward);
    state.discovery.navigate(PageDirection::Forward);

    let screen = calculate_screen_layout(FRAME, &state);

    assert_eq!(screen.cards.areas.len(), 2);
    assert!(screen.cards.areas.iter().all(|a| a.width == 20));
}

#[test]
fn oversized_page_wraps_to_rows_of_minimum_width_cards() {
    // GIVEN: A page far larger than the terminal can hold side by side
    let catalog = CatalogSource::Bundled.load().unwrap();
    let state = AppState::new(DiscoveryState::new(catalog, 300).unwrap());

    // WHEN: Laying out an 80x24 screen
    let screen = calculate_screen_layout(FRAME, &state);

    // THEN: Six 13-wide columns, the page wraps onto a second row
    assert_eq!(screen.cards.areas.len(), 10);
    assert!(screen.cards.areas.iter().all(|a| a.width == 13));
    assert_eq!(
        screen.cards.areas[6],
        Rect::new(0, 12, 13, CAROUSEL_CARD_MAX_HEIGHT),
    );
    assert!(rendered_text(&state).contains("Kanakapura"));
}

#[test]
fn huge_page_size_stays_bounded_by_screen() {
    let catalog = CatalogSource::Bundled.load().unwrap();
    let state = AppState::new(DiscoveryState::new(catalog, 1_000_000).unwrap());

    let screen = calculate_screen_layout(FRAME, &state);

    assert!(!screen.cards.areas.is_empty());
    for area in &screen.cards.areas {
        assert!(area.width >= CAROUSEL_CARD_MIN_WIDTH);
        assert!(area.right() <= FRAME.width);
    }
}

#[test]
fn wrapped_carousel_scrolls_to_selected_card() {
    let catalog = CatalogSource::Bundled.load().unwrap();
    let mut state = AppState::new(DiscoveryState::new(catalog, 300).unwrap());
    assert!(state.discovery.select(9));

    // 40x16: three columns, one row of cards fits
    let screen = calculate_screen_layout(Rect::new(0, 0, 40, 16), &state);

    assert_eq!(screen.cards.first_index, 9);
    assert_eq!(screen.cards.areas.len(), 1);
    assert_eq!(screen.cards.hit(1, 5), Some(9));
}

#[test]
fn search_grid_uses_two_columns_at_eighty_wide() {
    let mut state = bundled_state();
    state.discovery.set_query("cycling");

    let screen = calculate_screen_layout(FRAME, &state);

    assert_eq!(
        screen.cards.areas,
        vec![
            Rect::new(0, 4, 40, GRID_CARD_HEIGHT),
            Rect::new(40, 4, 40, GRID_CARD_HEIGHT),
        ]
    );
}

#[test]
fn search_grid_scrolls_to_keep_selection_visible() {
    let mut state = bundled_state();
    state.discovery.set_query("a");
    assert_eq!(state.discovery.visible_items().len(), 10);
    assert!(state.discovery.select(7));

    let screen = calculate_screen_layout(FRAME, &state);

    // Three rows of two fit; the selection's row (3) is the last one shown
    assert_eq!(screen.cards.first_index, 2);
    assert_eq!(screen.cards.areas.len(), 6);
    assert_eq!(screen.cards.hit(45, 15), Some(7));
}

#[test]
fn card_layout_hit_maps_back_to_item_index() {
    let screen = calculate_screen_layout(FRAME, &bundled_state());
    assert_eq!(screen.cards.hit(25, 6), Some(1));
    assert_eq!(screen.cards.hit(25, 20), None, "Below the cards");
}

#[test]
fn zero_sized_body_has_no_cards() {
    let screen = calculate_screen_layout(Rect::new(0, 0, 80, 5), &bundled_state());
    assert_eq!(screen.body.height, 0);
    assert!(screen.cards.areas.is_empty());
}

// ===== Rendering =====

#[test]
fn heading_shows_title_and_page_counter() {
    let output = rendered_text(&bundled_state());
    let first_line = output.lines().next().unwrap_or_default();

    assert!(
        first_line.starts_with("Editor's Pick  1/3"),
        "got: {first_line}",
    );
    assert!(first_line.contains(PREV_CONTROL));
    assert!(first_line.contains(NEXT_CONTROL));
}

#[test]
fn prev_control_is_dimmed_on_first_page() {
    let state = bundled_state();
    let screen = calculate_screen_layout(FRAME, &state);
    let terminal = render(&state);
    let buffer = terminal.backend().buffer();

    let prev = &buffer[(screen.prev_control.x, 0)];
    let next = &buffer[(screen.next_control.x, 0)];
    assert!(prev.modifier.contains(Modifier::DIM));
    assert!(!next.modifier.contains(Modifier::DIM));
}

#[test]
fn both_controls_dimmed_while_searching() {
    let mut state = bundled_state();
    state.discovery.set_query("trek");
    let screen = calculate_screen_layout(FRAME, &state);
    let terminal = render(&state);
    let buffer = terminal.backend().buffer();

    assert!(buffer[(screen.prev_control.x, 0)]
        .modifier
        .contains(Modifier::DIM));
    assert!(buffer[(screen.next_control.x, 0)]
        .modifier
        .contains(Modifier::DIM));
}

#[test]
fn forward_page_change_shows_slide_indicator() {
    let mut state = bundled_state();
    state.discovery.navigate(PageDirection::Forward);

    let output = rendered_text(&state);
    assert!(output.contains("2/3 ◂◂"), "got:\n{output}");
    assert!(output.contains("Sanjay Gandhi"));
}

#[test]
fn slide_indicator_follows_enter_side() {
    assert_eq!(slide_indicator(Some(SlideSide::Right)), "◂◂");
    assert_eq!(slide_indicator(Some(SlideSide::Left)), "▸▸");
    assert_eq!(slide_indicator(None), "");
}

#[test]
fn carousel_renders_first_page_cards() {
    let output = rendered_text(&bundled_state());
    assert!(output.contains(" yoga "));
    assert!(output.contains(" hiking "));
    // 18 columns inside the border, so the excerpt wraps after "gentle"
    assert!(output.contains("60-minu..."));
    assert!(!output.contains("Ulsoor"), "Second page must not render");
}

#[test]
fn searching_renders_matches_count_and_grid_excerpts() {
    let mut state = bundled_state();
    state.discovery.set_query("yoga");

    let output = rendered_text(&state);
    assert!(output.contains("1 match"), "got:\n{output}");
    assert!(output.contains("Sunrise Flow at Cubbon Park"));
    assert!(output.contains("A gentle 60-minute stret…"));
}

#[test]
fn no_results_renders_indicator() {
    let mut state = bundled_state();
    state.discovery.set_query("zumba");

    let output = rendered_text(&state);
    assert!(output.contains(NO_RESULTS_TEXT));
    assert!(output.contains("0 matches"));
}

#[test]
fn empty_catalog_renders_placeholder() {
    let state = AppState::new(DiscoveryState::new(Catalog::empty(), 4).unwrap());
    let output = rendered_text(&state);
    assert!(output.contains(EMPTY_CATALOG_TEXT));
    assert!(!output.contains("1/"), "No page counter without pages");
}

#[test]
fn status_bar_shows_opened_route() {
    let mut state = bundled_state();
    state.opened = Some(NavigationIntent::new(
        Slug::new("nandi-hills-night-trek").unwrap(),
    ));

    let output = rendered_text(&state);
    let last_line = output.lines().last().unwrap_or_default();
    assert_eq!(last_line, "Opened /event/nandi-hills-night-trek");
}

#[test]
fn status_bar_hints_follow_focus() {
    let mut state = bundled_state();
    assert!(rendered_text(&state).contains("/ search"));

    state.focus = Focus::Search;
    assert!(rendered_text(&state).contains("Esc clear"));
}
