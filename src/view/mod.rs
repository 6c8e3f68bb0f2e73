//! TUI rendering and terminal management (impure shell)

mod card;
pub mod constants;
mod layout;
mod search_input;
mod styles;

pub use card::{truncate_description, CardVariant, EventCard};
pub use layout::{calculate_screen_layout, render_screen, CardLayout, ScreenLayout};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Styles};

use crate::config::keybindings::KeyBindings;
use crate::model::AppError;
use crate::state::{
    filter_input_handler, handle_action, mouse_handler, ActionOutcome, AppState, Direction, Focus,
};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: Styles,
    /// Regions drawn in the last frame (for mouse hit-testing)
    last_screen: ScreenLayout,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(app_state: AppState, styles: Styles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles,
            last_screen: ScreenLayout::default(),
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on input between
    /// events; every handled event is followed by one redraw.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Some platforms report releases too; act on presses only
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Ctrl+C always quits, even while typing a query
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.is_search_focused() && self.handle_query_key(key) {
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        handle_action(&mut self.app_state, action) == ActionOutcome::Quit
    }

    /// Route text-editing keys to the query while the search bar has focus.
    ///
    /// Returns true if the key was consumed.
    fn handle_query_key(&mut self, key: KeyEvent) -> bool {
        let discovery = &mut self.app_state.discovery;
        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                discovery.edit_query(|f| filter_input_handler::handle_char_input(f, ch));
            }
            KeyCode::Backspace => {
                discovery.edit_query(filter_input_handler::handle_backspace);
            }
            KeyCode::Delete => {
                discovery.edit_query(filter_input_handler::handle_delete);
            }
            KeyCode::Left => {
                discovery.edit_query(filter_input_handler::handle_cursor_left);
            }
            KeyCode::Right => {
                discovery.edit_query(filter_input_handler::handle_cursor_right);
            }
            _ => return false,
        }
        true
    }

    /// Handle a single mouse event
    ///
    /// Wheel input goes through the trackpad heuristic; left clicks hit-test
    /// the cards, the paging controls, and the search bar.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp
            | MouseEventKind::ScrollDown
            | MouseEventKind::ScrollLeft
            | MouseEventKind::ScrollRight => {
                mouse_handler::handle_mouse_scroll(&mut self.app_state, mouse.kind);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let screen = &self.last_screen;

        if let Some(index) = screen.cards.hit(column, row) {
            mouse_handler::handle_card_click(&mut self.app_state, index);
        } else if contains(screen.prev_control, column, row) {
            self.app_state.discovery.navigate(Direction::Backward);
        } else if contains(screen.next_control, column, row) {
            self.app_state.discovery.navigate(Direction::Forward);
        } else if contains(screen.search, column, row) {
            self.app_state.focus = Focus::Search;
        } else {
            self.app_state.focus = Focus::Cards;
        }
    }

    /// Render the current frame
    ///
    /// Recomputes the screen layout first so clicks are tested against what
    /// is on screen.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        self.last_screen = calculate_screen_layout(frame_area, &self.app_state);

        let state = &self.app_state;
        let screen = &self.last_screen;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_screen(frame, state, screen, styles);
        })?;

        Ok(())
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    mouse_handler::detect_card_click(column, row, &[area]).is_some()
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips raw mode and the alternate screen so tests can drive a
    /// TestBackend directly.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles: Styles::with_color_config(ColorConfig::disabled()),
            last_screen: ScreenLayout::default(),
        }
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event; returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn last_screen(&self) -> &ScreenLayout {
        &self.last_screen
    }
}

/// Initialize and run the TUI application with a prepared state
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// even if the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(app_state: AppState, colors: ColorConfig) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, Styles::with_color_config(colors))?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
