//! Event card widget.
//!
//! A card is a bordered box with the event type as its title, the event
//! title in bold, and a short excerpt of the description. The carousel and
//! the search grid cut the description at different lengths.

use crate::model::Item;
use crate::view::styles::Styles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Description characters shown on a carousel card.
pub const CAROUSEL_DESCRIPTION_CHARS: usize = 16;
/// Appended to every carousel excerpt.
pub const CAROUSEL_ELLIPSIS: &str = "...";
/// Description characters shown on a search result card.
pub const GRID_DESCRIPTION_CHARS: usize = 24;
/// Appended to every search result excerpt.
pub const GRID_ELLIPSIS: &str = "…";

/// Where a card is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    /// One of the current carousel page's cards.
    Carousel,
    /// One cell of the search results grid.
    Grid,
}

impl CardVariant {
    /// Description excerpt for this variant.
    pub fn excerpt(self, description: &str) -> String {
        match self {
            CardVariant::Carousel => {
                truncate_description(description, CAROUSEL_DESCRIPTION_CHARS, CAROUSEL_ELLIPSIS)
            }
            CardVariant::Grid => {
                truncate_description(description, GRID_DESCRIPTION_CHARS, GRID_ELLIPSIS)
            }
        }
    }
}

/// First `max_chars` characters of `text` followed by `suffix`.
///
/// Counts `char`s, never bytes, so multi-byte text is never split. The
/// suffix is appended even when nothing was cut; an empty description stays
/// empty.
pub fn truncate_description(text: &str, max_chars: usize, suffix: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let mut excerpt: String = text.chars().take(max_chars).collect();
    excerpt.push_str(suffix);
    excerpt
}

/// Card widget for a single event.
pub struct EventCard<'a> {
    item: &'a Item,
    variant: CardVariant,
    selected: bool,
    styles: &'a Styles,
}

impl<'a> EventCard<'a> {
    /// Unselected card for `item`.
    pub fn new(item: &'a Item, variant: CardVariant, styles: &'a Styles) -> Self {
        Self {
            item,
            variant,
            selected: false,
            styles,
        }
    }

    /// Draw the card with the selection border.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for EventCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (border_type, border_style) = if self.selected {
            (BorderType::Thick, self.styles.selected_border)
        } else {
            (BorderType::Plain, self.styles.card_border)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", self.item.kind()),
                self.styles.badge,
            ));

        let lines = vec![
            Line::from(Span::styled(self.item.title(), self.styles.card_title)),
            Line::from(Span::styled(
                self.variant.excerpt(self.item.description()),
                self.styles.description,
            )),
        ];

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
