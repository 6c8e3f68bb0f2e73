//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod action_handler;
pub mod app_state;
pub mod discovery;
pub mod filter;
pub mod filter_input_handler;
pub mod mouse_handler;
pub mod paging;
pub mod wheel;

// Re-export for convenience
pub use action_handler::{handle_action, ActionOutcome};
pub use app_state::{AppState, Focus};
pub use discovery::{DiscoveryState, Mode, RenderFrame};
pub use filter::{filter, FilterState};
pub use paging::{
    visible_slice, Direction, PagedSelector, PagingState, SlideSide, DEFAULT_PAGE_SIZE,
};
pub use wheel::{
    classify_wheel_event, classify_wheel_event_with_threshold, WheelClass,
    TRACKPAD_DELTA_THRESHOLD,
};
