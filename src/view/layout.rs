//! Discovery screen layout and rendering.
//!
//! Geometry is computed once per frame by [`calculate_screen_layout`] and
//! kept by the app so mouse clicks can be hit-tested against exactly what
//! was drawn.
//!
//! ```text
//! Editor's Pick  2/3 ◂◂                            ‹ prev  next ›
//! ┌Search──────────────────────────────────────────────────────┐
//! │                                                            │
//! └────────────────────────────────────────────────────────────┘
//! ┌ yoga ─────┐┌ hiking ───┐┌ running ──┐┌ cycling ──┐
//! │...        ││...        ││...        ││...        │
//! └───────────┘└───────────┘└───────────┘└───────────┘
//! ←/→ page  Tab select  Enter open  / search  q quit
//! ```

use crate::state::mouse_handler::detect_card_click;
use crate::state::{AppState, Focus, Mode, SlideSide};
use crate::view::card::{CardVariant, EventCard};
use crate::view::constants::{
    CAROUSEL_CARD_MAX_HEIGHT, CAROUSEL_CARD_MIN_WIDTH, GRID_CARD_HEIGHT, GRID_CARD_MIN_WIDTH,
    GRID_MAX_COLUMNS, HEADING_HEIGHT, NEXT_CONTROL, NO_RESULTS_TEXT, PREV_CONTROL,
    SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::view::search_input::SearchInput;
use crate::view::styles::Styles;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Shown in place of the carousel when the catalog has no events.
pub const EMPTY_CATALOG_TEXT: &str = "No events to show.";

/// Screen regions for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Heading text and page counter.
    pub heading: Rect,
    /// Previous-page control.
    pub prev_control: Rect,
    /// Next-page control.
    pub next_control: Rect,
    /// Search bar, including its border.
    pub search: Rect,
    /// Card area.
    pub body: Rect,
    /// Bottom status line.
    pub status: Rect,
    /// Where each visible card was drawn.
    pub cards: CardLayout,
}

/// Card rectangles in drawing order.
///
/// `areas[i]` holds visible item `first_index + i`. The search grid scrolls
/// to keep the selection on screen, so `first_index` can be non-zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardLayout {
    /// Visible-item index of `areas[0]`.
    pub first_index: usize,
    /// One rectangle per drawn card.
    pub areas: Vec<Rect>,
}

impl CardLayout {
    /// Visible item index under the given cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        detect_card_click(column, row, &self.areas).map(|pos| self.first_index + pos)
    }
}

/// Compute all regions for a terminal area.
pub fn calculate_screen_layout(area: Rect, state: &AppState) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADING_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    let heading_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PREV_CONTROL.width() as u16),
            Constraint::Length(2),
            Constraint::Length(NEXT_CONTROL.width() as u16),
        ])
        .split(rows[0]);

    let body = rows[2];

    ScreenLayout {
        heading: heading_cols[0],
        prev_control: heading_cols[1],
        next_control: heading_cols[3],
        search: rows[1],
        body,
        status: rows[3],
        cards: calculate_card_layout(body, state),
    }
}

/// Card rectangles for the current mode.
pub fn calculate_card_layout(body: Rect, state: &AppState) -> CardLayout {
    let discovery = &state.discovery;
    let count = discovery.visible_items().len();
    let selected = discovery.selected_index();
    let page_size = discovery.selector().page_size();

    match discovery.mode() {
        Mode::Browsing => carousel_layout(body, page_size, count, selected),
        Mode::Searching => grid_layout(body, count, selected),
    }
}

/// One column per page slot; a short last page leaves trailing slots empty
/// so card widths never jump between pages.
///
/// Slots narrower than [`CAROUSEL_CARD_MIN_WIDTH`] wrap onto further rows.
fn carousel_layout(body: Rect, page_size: usize, count: usize, selected: usize) -> CardLayout {
    let max_columns = usize::from((body.width / CAROUSEL_CARD_MIN_WIDTH).max(1));
    let columns = page_size.clamp(1, max_columns) as u16;
    tile(body, count, columns, CAROUSEL_CARD_MAX_HEIGHT, selected)
}

/// Row-major grid that scrolls whole rows to keep `selected` visible.
fn grid_layout(body: Rect, count: usize, selected: usize) -> CardLayout {
    let columns = (body.width / GRID_CARD_MIN_WIDTH).clamp(1, GRID_MAX_COLUMNS);
    tile(body, count, columns, GRID_CARD_HEIGHT, selected)
}

/// Lay `count` cards out in equal columns, showing only the rows that fit
/// and scrolling so the row holding `selected` is on screen.
fn tile(body: Rect, count: usize, columns: u16, max_height: u16, selected: usize) -> CardLayout {
    if count == 0 || body.width == 0 || body.height == 0 {
        return CardLayout::default();
    }

    let column_width = body.width / columns;
    let card_height = max_height.min(body.height);
    let visible_rows = usize::from((body.height / card_height).max(1));
    let columns = usize::from(columns);

    let selected_row = selected.min(count - 1) / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);
    let first_index = first_row * columns;
    let last_index = ((first_row + visible_rows) * columns).min(count);

    let areas = (first_index..last_index)
        .map(|index| {
            let offset = index - first_index;
            let row = (offset / columns) as u16;
            let col = (offset % columns) as u16;
            Rect::new(
                body.x + col * column_width,
                body.y + row * card_height,
                column_width,
                card_height,
            )
        })
        .collect();

    CardLayout { first_index, areas }
}

/// Render the whole discovery screen.
pub fn render_screen(frame: &mut Frame, state: &AppState, screen: &ScreenLayout, styles: &Styles) {
    render_heading(frame, state, screen, styles);

    frame.render_widget(
        SearchInput::new(
            state.discovery.filter_state(),
            state.is_search_focused(),
            styles,
        ),
        screen.search,
    );

    render_body(frame, state, screen, styles);
    render_status_bar(frame, screen.status, state, styles);
}

/// Motion arrow for the last page change.
///
/// A forward step slides the new page in from the right, so the cards move
/// left.
pub fn slide_indicator(enter_side: Option<SlideSide>) -> &'static str {
    match enter_side {
        Some(SlideSide::Right) => "◂◂",
        Some(SlideSide::Left) => "▸▸",
        None => "",
    }
}

fn render_heading(frame: &mut Frame, state: &AppState, screen: &ScreenLayout, styles: &Styles) {
    let discovery = &state.discovery;
    let render = discovery.frame();

    let mut spans = vec![Span::styled(state.heading.clone(), styles.heading)];

    match render.mode {
        Mode::Browsing => {
            let page_count = discovery.selector().page_count();
            if page_count > 0 {
                let paging = discovery.paging();
                spans.push(Span::raw(format!(
                    "  {}/{}",
                    paging.page_index + 1,
                    page_count
                )));
                let arrow = slide_indicator(paging.enter_side());
                if !arrow.is_empty() {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(arrow, styles.slide_indicator));
                }
            }
        }
        Mode::Searching => {
            let matches = render.visible_items.len();
            let noun = if matches == 1 { "match" } else { "matches" };
            spans.push(Span::raw(format!("  {matches} {noun}")));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), screen.heading);

    let control_style = |enabled: bool| {
        if enabled {
            styles.control_enabled
        } else {
            styles.control_disabled
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            PREV_CONTROL,
            control_style(render.can_go_back),
        )),
        screen.prev_control,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            NEXT_CONTROL,
            control_style(render.can_go_forward),
        )),
        screen.next_control,
    );
}

fn render_body(frame: &mut Frame, state: &AppState, screen: &ScreenLayout, styles: &Styles) {
    let discovery = &state.discovery;
    let render = discovery.frame();

    if render.visible_items.is_empty() {
        let text = match render.mode {
            Mode::Searching => NO_RESULTS_TEXT,
            Mode::Browsing => EMPTY_CATALOG_TEXT,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, styles.no_results)).alignment(Alignment::Center),
            screen.body,
        );
        return;
    }

    let variant = match render.mode {
        Mode::Browsing => CardVariant::Carousel,
        Mode::Searching => CardVariant::Grid,
    };
    let selected = discovery.selected_index();

    for (offset, area) in screen.cards.areas.iter().enumerate() {
        let index = screen.cards.first_index + offset;
        if let Some(item) = render.visible_items.get(index) {
            frame.render_widget(
                EventCard::new(item, variant, styles).selected(index == selected),
                *area,
            );
        }
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &Styles) {
    let text = match (&state.opened, state.focus) {
        (Some(intent), _) => format!("Opened {}", intent.route()),
        (None, Focus::Cards) => "←/→ page  Tab select  Enter open  / search  q quit".to_string(),
        (None, Focus::Search) => "type to filter  Esc clear  Enter open  Ctrl+c quit".to_string(),
    };

    frame.render_widget(Paragraph::new(Span::styled(text, styles.status)), area);
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
