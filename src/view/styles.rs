//! Styling for the discovery screen.
//!
//! Colors are optional; text modifiers (bold, dim, reversed) are kept even
//! with colors disabled so focus and disabled controls stay visible.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on, regardless of environment.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off, regardless of environment.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Styles =====

/// Every style the discovery screen uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    /// Carousel heading and page counter.
    pub heading: Style,
    /// Prev/next control that can be used.
    pub control_enabled: Style,
    /// Prev/next control at either end, or while searching.
    pub control_disabled: Style,
    /// Event type in the card border.
    pub badge: Style,
    /// Event title.
    pub card_title: Style,
    /// Description excerpt.
    pub description: Style,
    /// Unselected card border.
    pub card_border: Style,
    /// Border of the card under the cursor.
    pub selected_border: Style,
    /// Search bar border without focus.
    pub search_border: Style,
    /// Search bar border with focus.
    pub search_focused_border: Style,
    /// Cell under the query cursor.
    pub search_cursor: Style,
    /// Placeholder shown for an empty query.
    pub placeholder: Style,
    /// Direction arrows next to the page counter.
    pub slide_indicator: Style,
    /// No-results and empty-catalog messages.
    pub no_results: Style,
    /// Status line.
    pub status: Style,
}

impl Styles {
    /// Build the style set for a color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let plain = Self {
            heading: Style::default().add_modifier(Modifier::BOLD),
            control_enabled: Style::default().add_modifier(Modifier::BOLD),
            control_disabled: Style::default().add_modifier(Modifier::DIM),
            badge: Style::default().add_modifier(Modifier::ITALIC),
            card_title: Style::default().add_modifier(Modifier::BOLD),
            description: Style::default(),
            card_border: Style::default(),
            selected_border: Style::default().add_modifier(Modifier::BOLD),
            search_border: Style::default(),
            search_focused_border: Style::default().add_modifier(Modifier::BOLD),
            search_cursor: Style::default().add_modifier(Modifier::REVERSED),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            slide_indicator: Style::default().add_modifier(Modifier::DIM),
            no_results: Style::default().add_modifier(Modifier::ITALIC),
            status: Style::default(),
        };

        if !config.colors_enabled() {
            return plain;
        }

        Self {
            heading: plain.heading.fg(Color::Cyan),
            control_enabled: plain.control_enabled.fg(Color::Yellow),
            control_disabled: plain.control_disabled.fg(Color::DarkGray),
            badge: plain.badge.fg(Color::Magenta),
            card_title: plain.card_title.fg(Color::White),
            description: plain.description.fg(Color::Gray),
            card_border: plain.card_border.fg(Color::DarkGray),
            selected_border: plain.selected_border.fg(Color::Yellow),
            search_border: plain.search_border.fg(Color::DarkGray),
            search_focused_border: plain.search_focused_border.fg(Color::Cyan),
            search_cursor: Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            placeholder: plain.placeholder.fg(Color::DarkGray),
            slide_indicator: plain.slide_indicator.fg(Color::Cyan),
            no_results: plain.no_results.fg(Color::Red),
            status: plain.status.fg(Color::Gray),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
