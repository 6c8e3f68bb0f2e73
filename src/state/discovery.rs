//! Combined discovery state: carousel plus live search.
//!
//! Two mutually exclusive modes:
//! - Browsing: query blank, the paged carousel is shown
//! - Searching: query non-blank, every match is shown and paging is bypassed
//!
//! The carousel only exists while browsing. Leaving Searching remounts it on
//! the first page with no direction, the same as at startup.

use crate::model::{Catalog, Item, NavigationIntent, PagingError};
use crate::state::filter::{filter, FilterState};
use crate::state::filter_input_handler;
use crate::state::paging::{Direction, PagedSelector, PagingState};
use crate::state::wheel::{WheelClass, TRACKPAD_DELTA_THRESHOLD};
use tracing::debug;

// ===== Mode =====

/// Display mode, derived from the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Query blank: the paged carousel is shown.
    Browsing,
    /// Query non-blank: every match is shown, paging bypassed.
    Searching,
}

// ===== RenderFrame =====

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame<'a> {
    /// Cards to draw, in catalog order.
    pub visible_items: Vec<&'a Item>,
    /// Previous-page control is enabled.
    pub can_go_back: bool,
    /// Next-page control is enabled.
    pub can_go_forward: bool,
    /// Which of the two layouts to draw.
    pub mode: Mode,
}

impl RenderFrame<'_> {
    /// Searching with zero matches. Distinct from Browsing an empty catalog.
    pub fn is_no_results(&self) -> bool {
        self.mode == Mode::Searching && self.visible_items.is_empty()
    }
}

// ===== DiscoveryState =====

/// Owns the catalog, the carousel, the query, and the card cursor.
#[derive(Debug, Clone)]
pub struct DiscoveryState {
    catalog: Catalog,
    selector: PagedSelector,
    filter: FilterState,
    wheel_threshold: f64,
    /// Index into the currently visible items.
    selected: usize,
}

impl DiscoveryState {
    /// Start in Browsing mode on the first page.
    ///
    /// # Errors
    ///
    /// Returns `PagingError::ZeroPageSize` if `page_size` is 0.
    pub fn new(catalog: Catalog, page_size: usize) -> Result<Self, PagingError> {
        let selector = PagedSelector::new(catalog.clone(), page_size)?;
        Ok(Self {
            catalog,
            selector,
            filter: FilterState::new(),
            wheel_threshold: TRACKPAD_DELTA_THRESHOLD,
            selected: 0,
        })
    }

    /// Override the trackpad heuristic's vertical threshold.
    pub fn with_wheel_threshold(mut self, threshold: f64) -> Self {
        self.wheel_threshold = threshold;
        self
    }

    /// The full catalog, independent of mode.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The carousel. Its page is meaningful only while browsing.
    pub fn selector(&self) -> &PagedSelector {
        &self.selector
    }

    /// Current page and last direction.
    pub fn paging(&self) -> PagingState {
        self.selector.state()
    }

    /// Query text and cursor.
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Raw query text, untrimmed.
    pub fn query(&self) -> &str {
        self.filter.query()
    }

    /// Vertical delta below which wheel events count as trackpad.
    pub fn wheel_threshold(&self) -> f64 {
        self.wheel_threshold
    }

    /// Browsing when the query is blank, Searching otherwise.
    pub fn mode(&self) -> Mode {
        if self.filter.is_blank() {
            Mode::Browsing
        } else {
            Mode::Searching
        }
    }

    // ===== Paging =====

    /// Page the carousel. Ignored while searching.
    pub fn navigate(&mut self, direction: Direction) -> PagingState {
        if self.mode() == Mode::Searching {
            return self.selector.state();
        }

        let before = self.selector.state().page_index;
        let state = self.selector.navigate(direction);
        if state.page_index != before {
            self.selected = 0;
        }
        state
    }

    /// Route a wheel event to the carousel.
    ///
    /// While searching there is no carousel to intercept it, so every event
    /// passes through.
    pub fn handle_wheel(&mut self, delta_x: f64, delta_y: f64) -> WheelClass {
        if self.mode() == Mode::Searching {
            debug!(delta_x, delta_y, "Wheel event passed through (searching)");
            return WheelClass::PassThrough;
        }

        let before = self.selector.state().page_index;
        let class = self
            .selector
            .handle_wheel(delta_x, delta_y, self.wheel_threshold);
        if self.selector.state().page_index != before {
            self.selected = 0;
        }
        class
    }

    // ===== Query =====

    /// Apply one edit to the query and recompute the mode.
    ///
    /// Returns the mode after the edit.
    pub fn edit_query(&mut self, edit: impl FnOnce(FilterState) -> FilterState) -> Mode {
        let before_mode = self.mode();
        let before_query = self.filter.query().to_owned();

        self.filter = edit(std::mem::take(&mut self.filter));

        let after_mode = self.mode();
        if self.filter.query() != before_query {
            self.selected = 0;
        }

        match (before_mode, after_mode) {
            (Mode::Browsing, Mode::Searching) => {
                debug!(query = self.filter.query(), "Browsing -> Searching");
            }
            (Mode::Searching, Mode::Browsing) => {
                debug!("Searching -> Browsing, carousel remounted");
                self.selector.reset();
            }
            _ => {}
        }

        after_mode
    }

    /// Replace the whole query.
    pub fn set_query(&mut self, query: impl Into<String>) -> Mode {
        let query = query.into();
        self.edit_query(|_| FilterState::with_query(query))
    }

    /// Clear the query, returning to Browsing.
    pub fn clear_query(&mut self) -> Mode {
        self.edit_query(filter_input_handler::clear_query)
    }

    // ===== Rendering =====

    /// Items to draw: the current page while browsing, all matches while
    /// searching.
    pub fn visible_items(&self) -> Vec<&Item> {
        match self.mode() {
            Mode::Browsing => self.selector.visible().iter().collect(),
            Mode::Searching => filter(&self.catalog, self.filter.query()),
        }
    }

    /// Snapshot for the presentation layer.
    pub fn frame(&self) -> RenderFrame<'_> {
        let mode = self.mode();
        let (can_go_back, can_go_forward) = match mode {
            Mode::Browsing => (self.selector.can_go_back(), self.selector.can_go_forward()),
            Mode::Searching => (false, false),
        };

        RenderFrame {
            visible_items: self.visible_items(),
            can_go_back,
            can_go_forward,
            mode,
        }
    }

    // ===== Selection =====

    /// Cursor position within the visible items.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Move the cursor to the next visible card, stopping at the last one.
    pub fn select_next(&mut self) {
        let count = self.visible_items().len();
        if count == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(count - 1);
    }

    /// Move the cursor to the previous visible card, stopping at the first.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Put the cursor on a specific visible card, if it exists.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.visible_items().len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Item under the card cursor, if any card is visible.
    pub fn selected_item(&self) -> Option<&Item> {
        self.visible_items().get(self.selected).copied()
    }

    /// Navigation intent for the selected card, if any card is visible.
    pub fn open_selected(&self) -> Option<NavigationIntent> {
        let intent = self
            .selected_item()
            .map(|item| NavigationIntent::new(item.slug().clone()));
        if let Some(intent) = &intent {
            debug!(route = %intent, "Navigation intent emitted");
        }
        intent
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
