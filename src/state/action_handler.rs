//! Key action dispatch (pure state transitions).
//!
//! Maps domain-level [`KeyAction`]s onto the discovery state. Raw key
//! decoding and query typing happen in the view layer before this runs.

use crate::model::KeyAction;
use crate::state::{AppState, Direction, Focus};
use tracing::info;

/// Outcome of dispatching an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Keep running.
    Continue,
    /// The user asked to quit.
    Quit,
}

/// Apply one action to the application state.
pub fn handle_action(state: &mut AppState, action: KeyAction) -> ActionOutcome {
    match action {
        KeyAction::PrevPage => {
            state.discovery.navigate(Direction::Backward);
        }
        KeyAction::NextPage => {
            state.discovery.navigate(Direction::Forward);
        }
        KeyAction::NextCard => state.discovery.select_next(),
        KeyAction::PrevCard => state.discovery.select_prev(),
        KeyAction::OpenSelected => {
            if let Some(intent) = state.discovery.open_selected() {
                info!(route = %intent, "Opening event");
                state.opened = Some(intent);
            }
        }
        KeyAction::FocusSearch => state.focus = Focus::Search,
        KeyAction::ClearSearch => {
            // Esc with an empty query just gives focus back to the cards.
            if state.discovery.query().is_empty() {
                state.focus = Focus::Cards;
            } else {
                state.discovery.clear_query();
            }
        }
        KeyAction::Quit => return ActionOutcome::Quit,
    }

    ActionOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::CatalogSource;
    use crate::state::{DiscoveryState, Mode};

    fn app() -> AppState {
        let catalog = CatalogSource::Bundled.load().unwrap();
        AppState::new(DiscoveryState::new(catalog, 4).unwrap())
    }

    #[test]
    fn next_and_prev_page_move_carousel() {
        let mut state = app();
        handle_action(&mut state, KeyAction::NextPage);
        assert_eq!(state.discovery.paging().page_index, 1);
        handle_action(&mut state, KeyAction::PrevPage);
        assert_eq!(state.discovery.paging().page_index, 0);
    }

    #[test]
    fn card_actions_move_cursor() {
        let mut state = app();
        handle_action(&mut state, KeyAction::NextCard);
        handle_action(&mut state, KeyAction::NextCard);
        handle_action(&mut state, KeyAction::PrevCard);
        assert_eq!(state.discovery.selected_index(), 1);
    }

    #[test]
    fn open_selected_records_route() {
        let mut state = app();
        handle_action(&mut state, KeyAction::OpenSelected);
        let opened = state.opened.as_ref().expect("first card opened");
        assert_eq!(opened.route(), "/event/sunrise-flow-cubbon-park");
    }

    #[test]
    fn focus_search_moves_focus() {
        let mut state = app();
        handle_action(&mut state, KeyAction::FocusSearch);
        assert_eq!(state.focus, Focus::Search);
    }

    #[test]
    fn clear_search_clears_query_then_releases_focus() {
        let mut state = app();
        handle_action(&mut state, KeyAction::FocusSearch);
        state.discovery.set_query("trek");

        handle_action(&mut state, KeyAction::ClearSearch);
        assert_eq!(state.discovery.mode(), Mode::Browsing);
        assert_eq!(state.focus, Focus::Search, "First Esc only clears");

        handle_action(&mut state, KeyAction::ClearSearch);
        assert_eq!(state.focus, Focus::Cards);
    }

    #[test]
    fn clear_search_clears_whitespace_only_query() {
        let mut state = app();
        state.focus = Focus::Search;
        state.discovery.set_query("  ");
        handle_action(&mut state, KeyAction::ClearSearch);
        assert_eq!(state.discovery.query(), "");
        assert_eq!(state.focus, Focus::Search);
    }

    #[test]
    fn quit_returns_quit() {
        let mut state = app();
        assert_eq!(
            handle_action(&mut state, KeyAction::Quit),
            ActionOutcome::Quit,
        );
        assert_eq!(
            handle_action(&mut state, KeyAction::NextPage),
            ActionOutcome::Continue
        );
    }
}
