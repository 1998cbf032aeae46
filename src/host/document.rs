use crate::core::types::{EditAction, KeyEvent, LogicalKey};
use crate::host::EditActionSink;

/// In-memory stand-in for the focused application: a text with the cursor
/// at its end. Used by the terminal simulator and by tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Deletes up to `count` chars before the cursor.
    pub fn delete_back(&mut self, count: usize) {
        for _ in 0..count {
            if self.text.pop().is_none() {
                break;
            }
        }
    }

    pub fn insert(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// What the application does with a key nobody intercepted.
    fn default_handling(&mut self, key: LogicalKey) {
        match key {
            LogicalKey::Char(ch) => self.text.push(ch),
            LogicalKey::Backspace => self.delete_back(1),
            LogicalKey::ToggleHotkey => {}
        }
    }
}

impl EditActionSink for TextDocument {
    fn apply(&mut self, event: &KeyEvent, action: &EditAction) {
        if !event.is_key_down {
            return;
        }
        match action {
            EditAction::PassThrough => self.default_handling(event.key),
            EditAction::Suppress => {}
            EditAction::Replace {
                delete_count,
                insert_text,
                terminal_char,
            } => {
                self.delete_back(*delete_count);
                self.insert(insert_text);
                self.text.push(*terminal_char);
            }
        }
    }
}
