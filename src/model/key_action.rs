//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Carousel paging
    /// Slide the carousel back one page. Default: h/←
    PrevPage,
    /// Slide the carousel forward one page. Default: l/→
    NextPage,

    // Card selection
    /// Move the card cursor to the next visible card. Default: Tab/j/↓
    NextCard,
    /// Move the card cursor to the previous visible card. Default: Shift+Tab/k/↑
    PrevCard,
    /// Open the selected card's detail page. Default: Enter
    OpenSelected,

    // Search
    /// Give the search bar keyboard focus. Default: /
    FocusSearch,
    /// Clear the query and return to browsing. Default: Esc
    ClearSearch,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn actions_are_hashable_and_distinct() {
        let all = [
            KeyAction::PrevPage,
            KeyAction::NextPage,
            KeyAction::NextCard,
            KeyAction::PrevCard,
            KeyAction::OpenSelected,
            KeyAction::FocusSearch,
            KeyAction::ClearSearch,
            KeyAction::Quit,
        ];
        let set: HashSet<_> = all.iter().copied().collect();
        assert_eq!(set.len(), all.len());
    }
}
