//! Per-process word buffering and conversion trigger.
//!
//! `InputSession` tracks the word typed since the last boundary and, on
//! each key-down, returns the `EditAction` the host must carry out. All
//! state sits behind one mutex; the returned action is applied by the
//! caller after the lock is gone.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, debug_span, info};

use crate::core::converter::Transliterator;
use crate::core::table::PatternTable;
use crate::core::types::{EditAction, KeyEvent, LogicalKey};

/// Chars that end a word and trigger conversion.
pub fn is_boundary_char(ch: char) -> bool {
    matches!(ch, ' ' | '\n' | '\t')
}

/// Chars that may be buffered as part of a phonetic word.
pub fn is_valid_input_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | ':' | '$' | '_')
}

#[derive(Debug, Default)]
struct SessionState {
    enabled: bool,
    buffer: String,
}

impl SessionState {
    fn reset(&mut self) {
        self.buffer.clear();
    }
}

/// Stateful input session. Shareable between the key path and a toggle
/// source on another thread.
pub struct InputSession {
    transliterator: Transliterator<'static>,
    state: Mutex<SessionState>,
}

impl InputSession {
    /// Disabled session over the built-in Bengali table.
    pub fn new() -> Self {
        Self::with_table(PatternTable::bengali(), false)
    }

    pub fn with_enabled(enabled: bool) -> Self {
        Self::with_table(PatternTable::bengali(), enabled)
    }

    pub fn with_table(table: &'static PatternTable, enabled: bool) -> Self {
        Self {
            transliterator: Transliterator::new(table),
            state: Mutex::new(SessionState {
                enabled,
                buffer: String::new(),
            }),
        }
    }

    // Every transition leaves the state whole, so a panic elsewhere while
    // the lock was held does not make it unusable.
    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    /// Snapshot of the unconverted word.
    pub fn buffer(&self) -> String {
        self.lock().buffer.clone()
    }

    /// Flips the enabled flag, clears the buffer, and returns the new flag.
    pub fn toggle(&self) -> bool {
        let mut state = self.lock();
        state.enabled = !state.enabled;
        state.reset();
        info!(enabled = state.enabled, "input session toggled");
        state.enabled
    }

    /// Processes one key event. Never blocks on anything but the session
    /// lock and never fails.
    pub fn handle_key(&self, event: KeyEvent) -> EditAction {
        let _span = debug_span!("handle_key", key = ?event.key, down = event.is_key_down).entered();

        if !event.is_key_down {
            return EditAction::PassThrough;
        }

        if event.key == LogicalKey::ToggleHotkey {
            self.toggle();
            return EditAction::Suppress;
        }

        let mut state = self.lock();
        if !state.enabled {
            return EditAction::PassThrough;
        }

        match event.key {
            LogicalKey::Backspace => {
                state.buffer.pop();
                EditAction::PassThrough
            }
            LogicalKey::Char(ch) if is_boundary_char(ch) => self.finish_word(&mut state, ch),
            LogicalKey::Char(ch) if is_valid_input_char(ch) => {
                state.buffer.push(ch);
                EditAction::PassThrough
            }
            LogicalKey::Char(_) => {
                state.reset();
                EditAction::PassThrough
            }
            LogicalKey::ToggleHotkey => unreachable!("handled before locking"),
        }
    }

    fn finish_word(&self, state: &mut SessionState, boundary: char) -> EditAction {
        if state.buffer.is_empty() {
            return EditAction::PassThrough;
        }

        let word = std::mem::take(&mut state.buffer);
        let converted = self.transliterator.convert(&word);
        if converted.is_empty() || converted == word {
            return EditAction::PassThrough;
        }

        debug!(%word, %converted, "replacing word");
        EditAction::Replace {
            delete_count: word.chars().count(),
            insert_text: converted,
            terminal_char: boundary,
        }
    }
}

impl Default for InputSession {
    fn default() -> Self {
        Self::new()
    }
}
