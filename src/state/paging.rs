//! Paged selector state machine.
//!
//! A fixed-size window over an ordered catalog. The window moves one page at
//! a time; moves past either end are absorbed without touching state.

use crate::model::{Catalog, Item, PagingError};
use crate::state::wheel::{classify_wheel_event_with_threshold, WheelClass};
use std::num::NonZeroUsize;
use tracing::debug;

/// Cards per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 4;

// ===== Direction =====

/// Navigation direction. Only the two unit steps are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One page toward the start (-1).
    Backward,
    /// One page toward the end (+1).
    Forward,
}

impl Direction {
    /// Signed step: -1 or +1.
    pub fn delta(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}

/// Horizontal edge a page slides in from or out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideSide {
    /// Left edge of the carousel.
    Left,
    /// Right edge of the carousel.
    Right,
}

// ===== PagingState =====

/// Current page plus the direction of the last page change.
///
/// `direction` is `None` until the first successful navigation. It only
/// selects the transition variant and never affects which items are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagingState {
    /// Zero-based page, always within `0..=max_page` for a non-empty catalog.
    pub page_index: usize,
    /// Direction of the most recent page change.
    pub direction: Option<Direction>,
}

impl PagingState {
    /// Direction as -1, 0 or +1.
    pub fn direction_delta(&self) -> i8 {
        self.direction.map_or(0, Direction::delta)
    }

    /// Edge the current page entered from.
    ///
    /// Forward moves bring the new page in from the right, backward moves
    /// from the left. The initial page does not animate.
    pub fn enter_side(&self) -> Option<SlideSide> {
        self.direction.map(|d| match d {
            Direction::Forward => SlideSide::Right,
            Direction::Backward => SlideSide::Left,
        })
    }
}

// ===== PagedSelector =====

/// Fixed-size window over a catalog with clamped navigation.
#[derive(Debug, Clone)]
pub struct PagedSelector {
    items: Catalog,
    page_size: NonZeroUsize,
    state: PagingState,
}

impl PagedSelector {
    /// Create a selector positioned on the first page.
    ///
    /// # Errors
    ///
    /// Returns `PagingError::ZeroPageSize` if `page_size` is 0.
    pub fn new(items: Catalog, page_size: usize) -> Result<Self, PagingError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(PagingError::ZeroPageSize)?;
        Ok(Self {
            items,
            page_size,
            state: PagingState::default(),
        })
    }

    /// Every item, across all pages.
    pub fn items(&self) -> &Catalog {
        &self.items
    }

    /// Items per page, at least 1.
    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Current page and last direction.
    pub fn state(&self) -> PagingState {
        self.state
    }

    /// Number of pages; 0 for an empty catalog.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }

    /// Index of the last page, or `None` when there are no pages.
    pub fn max_page(&self) -> Option<usize> {
        self.page_count().checked_sub(1)
    }

    /// A previous page exists.
    pub fn can_go_back(&self) -> bool {
        self.state.page_index > 0
    }

    /// A next page exists.
    pub fn can_go_forward(&self) -> bool {
        self.max_page()
            .is_some_and(|max| self.state.page_index < max)
    }

    /// Move one page in `direction`, clamped to the valid range.
    ///
    /// A move that would leave the range is a no-op: neither the page nor
    /// the recorded direction changes.
    pub fn navigate(&mut self, direction: Direction) -> PagingState {
        let Some(max_page) = self.max_page() else {
            return self.state;
        };

        let current = self.state.page_index;
        let next = match direction {
            Direction::Backward => current.saturating_sub(1),
            Direction::Forward => current.saturating_add(1).min(max_page),
        };

        if next != current {
            debug!(from = current, to = next, ?direction, "Carousel page changed");
            self.state = PagingState {
                page_index: next,
                direction: Some(direction),
            };
        }

        self.state
    }

    /// Back to the first page with no recorded direction, as if freshly mounted.
    pub fn reset(&mut self) {
        self.state = PagingState::default();
    }

    /// Items on the current page, in catalog order.
    pub fn visible(&self) -> &[Item] {
        visible_slice(&self.items, self.state.page_index, self.page_size)
    }

    /// Classify a wheel event and page if it is a wheel tick.
    pub fn handle_wheel(&mut self, delta_x: f64, delta_y: f64, threshold: f64) -> WheelClass {
        let class = classify_wheel_event_with_threshold(delta_x, delta_y, threshold);
        match class {
            WheelClass::Consume(direction) => {
                debug!(delta_x, delta_y, ?direction, "Wheel event consumed (mouse wheel)");
                self.navigate(direction);
            }
            WheelClass::PassThrough => {
                debug!(delta_x, delta_y, "Wheel event passed through (trackpad)");
            }
        }
        class
    }
}

/// `items[page_index * page_size .. (page_index + 1) * page_size]`, clipped
/// to the collection. Out-of-range pages yield an empty slice.
pub fn visible_slice<T>(items: &[T], page_index: usize, page_size: NonZeroUsize) -> &[T] {
    let len = items.len();
    let start = page_index.saturating_mul(page_size.get()).min(len);
    let end = start.saturating_add(page_size.get()).min(len);
    &items[start..end]
}

// ===== Tests =====

#[cfg(test)]
#[path = "paging_tests.rs"]
mod tests;
