//! Fixed-capacity entry line.

use arrayvec::ArrayString;

use crate::map::EditAction;

/// Longest entry the runner accepts (a full game typed in one go fits).
pub const MAX_ENTRY_LEN: usize = 96;

/// The text being typed before it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: ArrayString<MAX_ENTRY_LEN>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a character. Returns `false` when the line is full.
    pub fn insert(&mut self, ch: char) -> bool {
        self.text.try_push(ch).is_ok()
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Apply an edit. Returns the submitted text on [`EditAction::Submit`].
    ///
    /// `NewGame` is not a line edit and is ignored here.
    pub fn apply(&mut self, action: EditAction) -> Option<String> {
        match action {
            EditAction::Insert(ch) => {
                self.insert(ch);
            }
            EditAction::Backspace => self.backspace(),
            EditAction::Clear => self.clear(),
            EditAction::Submit => return Some(self.take()),
            EditAction::NewGame => {}
        }
        None
    }

    /// Remove and return the current text.
    pub fn take(&mut self) -> String {
        let text = self.text.to_string();
        self.text.clear();
        text
    }
}
