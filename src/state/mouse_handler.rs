//! Mouse event handler.
//!
//! Pure functions that transform AppState in response to mouse events.
//!
//! Terminals report wheel motion as discrete scroll events with no
//! magnitude. Each event is translated into the pixel-style deltas a
//! browser would report for one wheel notch, then classified like any
//! other wheel input. Horizontal scroll events (tilt wheels, trackpad
//! swipes) carry a horizontal component and therefore pass through.

use crate::state::wheel::WheelClass;
use crate::state::AppState;
use crossterm::event::MouseEventKind;
use ratatui::layout::Rect;

/// Delta reported for one wheel notch.
pub const WHEEL_NOTCH_DELTA: f64 = 100.0;

/// Translate a terminal scroll event into `(delta_x, delta_y)`.
///
/// Returns `None` for non-scroll events.
pub fn wheel_delta(kind: MouseEventKind) -> Option<(f64, f64)> {
    match kind {
        MouseEventKind::ScrollUp => Some((0.0, -WHEEL_NOTCH_DELTA)),
        MouseEventKind::ScrollDown => Some((0.0, WHEEL_NOTCH_DELTA)),
        MouseEventKind::ScrollLeft => Some((-WHEEL_NOTCH_DELTA, 0.0)),
        MouseEventKind::ScrollRight => Some((WHEEL_NOTCH_DELTA, 0.0)),
        _ => None,
    }
}

/// Feed a scroll event to the carousel.
///
/// Returns the classification, or `None` if `kind` is not a scroll event.
pub fn handle_mouse_scroll(state: &mut AppState, kind: MouseEventKind) -> Option<WheelClass> {
    let (delta_x, delta_y) = wheel_delta(kind)?;
    Some(state.discovery.handle_wheel(delta_x, delta_y))
}

/// Index of the card area containing the click, if any.
pub fn detect_card_click(column: u16, row: u16, card_areas: &[Rect]) -> Option<usize> {
    card_areas.iter().position(|area| {
        column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height)
    })
}

/// Select the clicked card and open it, like following the card's link.
///
/// Returns true if a card was opened.
pub fn handle_card_click(state: &mut AppState, index: usize) -> bool {
    if !state.discovery.select(index) {
        return false;
    }
    match state.discovery.open_selected() {
        Some(intent) => {
            tracing::info!(route = %intent, "Opening event (click)");
            state.opened = Some(intent);
            true
        }
        None => false,
    }
}
