//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for layout-related numeric values and fixed strings
//! so the renderer and the mouse hit-testing agree on geometry.

/// Height of the heading row (title plus paging controls).
pub const HEADING_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Tallest a carousel card gets; extra body height is left empty.
pub const CAROUSEL_CARD_MAX_HEIGHT: u16 = 8;

/// Narrowest a carousel slot may get; larger pages wrap onto extra rows.
pub const CAROUSEL_CARD_MIN_WIDTH: u16 = 12;

/// Height of one search result card (border + badge + title + description).
pub const GRID_CARD_HEIGHT: u16 = 5;

/// Narrowest a search result column may get before the grid drops a column.
pub const GRID_CARD_MIN_WIDTH: u16 = 30;

/// Most columns the search grid will use.
pub const GRID_MAX_COLUMNS: u16 = 4;

/// Label of the previous-page control.
pub const PREV_CONTROL: &str = "‹ prev";

/// Label of the next-page control.
pub const NEXT_CONTROL: &str = "next ›";

/// Shown in place of the grid when a non-blank query matches nothing.
pub const NO_RESULTS_TEXT: &str = "No events found.";
