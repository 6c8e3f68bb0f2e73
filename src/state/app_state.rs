//! Application state.
//!
//! AppState wraps the discovery core with the bits only the TUI needs:
//! which widget has keyboard focus and the last opened route.

use crate::model::NavigationIntent;
use crate::state::DiscoveryState;

/// Which widget receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys page the carousel and move the card cursor.
    #[default]
    Cards,
    /// Printable keys edit the query.
    Search,
}

/// Root UI state. Pure data; transitions live in the handler modules.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Carousel, query, and card cursor.
    pub discovery: DiscoveryState,

    /// Which widget has keyboard focus.
    pub focus: Focus,

    /// Route of the most recently opened card.
    ///
    /// The detail page itself is out of scope; the status line shows the
    /// route instead.
    pub opened: Option<NavigationIntent>,

    /// Carousel heading text.
    pub heading: String,
}

impl AppState {
    /// Card focus, nothing opened, default heading.
    pub fn new(discovery: DiscoveryState) -> Self {
        Self {
            discovery,
            focus: Focus::default(),
            opened: None,
            heading: crate::config::DEFAULT_HEADING.to_string(),
        }
    }

    /// Replace the carousel heading.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = heading.into();
        self
    }

    /// True while typed characters go to the query.
    pub fn is_search_focused(&self) -> bool {
        self.focus == Focus::Search
    }
}
