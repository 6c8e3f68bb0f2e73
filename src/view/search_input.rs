//! Search input widget for rendering the search bar.

use crate::state::FilterState;
use crate::view::styles::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Shown in an empty, unfocused search bar.
pub const PLACEHOLDER: &str = "Search events (press /)";

/// Search input widget.
///
/// Draws the cursor only while the bar has keyboard focus.
pub struct SearchInput<'a> {
    filter: &'a FilterState,
    focused: bool,
    styles: &'a Styles,
}

impl<'a> SearchInput<'a> {
    /// Create new SearchInput widget.
    pub fn new(filter: &'a FilterState, focused: bool, styles: &'a Styles) -> Self {
        Self {
            filter,
            focused,
            styles,
        }
    }

    fn query_line(&self) -> Line<'static> {
        let query = self.filter.query();

        if !self.focused {
            if query.is_empty() {
                return Line::from(Span::styled(PLACEHOLDER, self.styles.placeholder));
            }
            return Line::from(query.to_string());
        }

        // Split query into before/at/after cursor
        let cursor = self.filter.cursor();
        let before: String = query.chars().take(cursor).collect();
        let mut rest = query.chars().skip(cursor);
        let at_cursor = rest.next().map_or_else(|| " ".to_string(), String::from);
        let after: String = rest.collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(at_cursor, self.styles.search_cursor),
            Span::raw(after),
        ])
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.search_focused_border
        } else {
            self.styles.search_border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search");

        Paragraph::new(self.query_line())
            .block(block)
            .render(area, buf);
    }
}
