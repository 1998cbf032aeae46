// src/core/types.rs
use serde::{Deserialize, Serialize};

/// Index of a pattern in the table's declaration order.
pub type EntryId = usize;

/// One phonetic pattern and the Bengali text it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub pattern: String,
    /// Independent form for vowels, the literal output for everything else.
    pub script: String,
    pub is_vowel: bool,
    /// Vowel sign used after a consonant. `Some("")` for the inherent vowel.
    pub diacritic: Option<String>,
}

/// Result of a longest-match query against the pattern table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternMatch<'t> {
    /// Number of input chars consumed.
    pub len: usize,
    pub script: &'t str,
    pub is_vowel: bool,
    pub diacritic: Option<&'t str>,
    pub is_inherent: bool,
}

/// A key as seen by the session, after the host has resolved raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalKey {
    Char(char),
    Backspace,
    ToggleHotkey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: LogicalKey,
    pub is_key_down: bool,
}

impl KeyEvent {
    pub fn down(key: LogicalKey) -> Self {
        Self { key, is_key_down: true }
    }

    pub fn up(key: LogicalKey) -> Self {
        Self { key, is_key_down: false }
    }

    pub fn char(ch: char) -> Self {
        Self::down(LogicalKey::Char(ch))
    }

    pub fn backspace() -> Self {
        Self::down(LogicalKey::Backspace)
    }
}

/// What the host must do with the key event that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditAction {
    /// Let the key through untouched.
    PassThrough,
    /// Swallow the key.
    Suppress,
    /// Swallow the key, delete `delete_count` chars before the cursor,
    /// insert `insert_text`, then type `terminal_char`.
    Replace {
        delete_count: usize,
        insert_text: String,
        terminal_char: char,
    },
}

impl EditAction {
    /// Whether the original key event must be swallowed by the host.
    pub fn suppresses_key(&self) -> bool {
        !matches!(self, EditAction::PassThrough)
    }
}

/// Serializable answer to a raw key event, as handed to out-of-process or
/// FFI hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDecision {
    /// Swallow the original key event.
    pub suppress: bool,
    /// `None` when the key is not one the engine handles.
    pub action: Option<EditAction>,
}

impl From<Option<(KeyEvent, EditAction)>> for KeyDecision {
    fn from(decided: Option<(KeyEvent, EditAction)>) -> Self {
        let action = decided.map(|(_, action)| action);
        Self {
            suppress: action.as_ref().is_some_and(EditAction::suppresses_key),
            action,
        }
    }
}
