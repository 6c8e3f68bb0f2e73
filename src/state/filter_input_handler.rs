//! Query editing (pure state transitions).
//!
//! Every keystroke in the search bar goes through one of these functions.
//! The cursor is a character index, so multi-byte input edits cleanly.

use crate::state::FilterState;

/// Byte offset of the `char_index`-th character (or the end of the string).
fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(offset, _)| offset)
}

/// Insert a character at the cursor and advance the cursor.
pub fn handle_char_input(state: FilterState, ch: char) -> FilterState {
    let (mut query, cursor) = state.into_parts();
    let at = byte_offset(&query, cursor);
    query.insert(at, ch);
    FilterState::from_parts(query, cursor + 1)
}

/// Delete the character before the cursor. No-op at position 0.
pub fn handle_backspace(state: FilterState) -> FilterState {
    let (mut query, cursor) = state.into_parts();
    if cursor == 0 {
        return FilterState::from_parts(query, cursor);
    }
    let at = byte_offset(&query, cursor - 1);
    query.remove(at);
    FilterState::from_parts(query, cursor - 1)
}

/// Delete the character under the cursor. No-op at the end.
pub fn handle_delete(state: FilterState) -> FilterState {
    let (mut query, cursor) = state.into_parts();
    if cursor < query.chars().count() {
        let at = byte_offset(&query, cursor);
        query.remove(at);
    }
    FilterState::from_parts(query, cursor)
}

/// Move cursor left by one character. Saturates at 0.
pub fn handle_cursor_left(state: FilterState) -> FilterState {
    let (query, cursor) = state.into_parts();
    FilterState::from_parts(query, cursor.saturating_sub(1))
}

/// Move cursor right by one character. Saturates at the query length.
pub fn handle_cursor_right(state: FilterState) -> FilterState {
    let (query, cursor) = state.into_parts();
    let max_cursor = query.chars().count();
    FilterState::from_parts(query, (cursor + 1).min(max_cursor))
}

/// Clear the query (the search bar's clear control).
pub fn clear_query(_state: FilterState) -> FilterState {
    FilterState::new()
}

// ===== Tests =====

#[cfg(test)]
#[path = "filter_input_handler_tests.rs"]
mod tests;
