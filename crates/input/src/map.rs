//! Key mapping from terminal events to entry-line edits.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press does to the entry line or the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Append a character to the entry
    Insert(char),
    /// Delete the last character
    Backspace,
    /// Discard the whole entry
    Clear,
    /// Roll every token in the entry
    Submit,
    /// Throw the current game away and start over
    NewGame,
}

/// Map keyboard input to entry edits.
pub fn handle_key_event(key: KeyEvent) -> Option<EditAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') | KeyCode::Char('N') => Some(EditAction::NewGame),
            KeyCode::Char('u') | KeyCode::Char('U') => Some(EditAction::Clear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Enter => Some(EditAction::Submit),
        KeyCode::Backspace => Some(EditAction::Backspace),
        KeyCode::Char(ch) if is_entry_char(ch) => Some(EditAction::Insert(ch)),
        _ => None,
    }
}

/// Check if key should quit the runner.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Characters that can appear in a roll entry.
fn is_entry_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, ',' | '/' | '-' | ' ' | '.')
}
