use crate::core::session::InputSession;
use crate::core::types::{EditAction, KeyEvent};
use crate::host::{EditActionSink, KeyCodeResolver, VirtualKeyResolver};
use crate::settings::Settings;

// The top-level composition: one session plus the host's key resolver.
// Hosts own an `ImeEngine` and hand out references to their key hook and
// to whatever issues toggle commands.
pub struct ImeEngine<R = VirtualKeyResolver> {
    session: InputSession,
    resolver: R,
}

impl ImeEngine<VirtualKeyResolver> {
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            InputSession::with_enabled(settings.start_enabled),
            VirtualKeyResolver::new(settings.toggle_key),
        )
    }
}

impl<R: KeyCodeResolver> ImeEngine<R> {
    pub fn new(session: InputSession, resolver: R) -> Self {
        Self { session, resolver }
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Resolves `raw` and runs it through the session. `None` when the key
    /// is not one the engine handles.
    pub fn decide(&self, raw: &R::Raw, is_key_down: bool) -> Option<(KeyEvent, EditAction)> {
        let key = self.resolver.resolve(raw)?;
        let event = KeyEvent { key, is_key_down };
        // The session lock is released when handle_key returns.
        let action = self.session.handle_key(event);
        Some((event, action))
    }

    /// Full key path: decide, then apply the action to `sink` outside the
    /// session lock. Returns true when the host must swallow the original key.
    pub fn process<S: EditActionSink>(&self, raw: &R::Raw, is_key_down: bool, sink: &mut S) -> bool {
        match self.decide(raw, is_key_down) {
            Some((event, action)) => {
                sink.apply(&event, &action);
                action.suppresses_key()
            }
            None => false,
        }
    }

    pub fn toggle(&self) -> bool {
        self.session.toggle()
    }

    pub fn is_enabled(&self) -> bool {
        self.session.is_enabled()
    }

    pub fn status_text(&self) -> String {
        let state = if self.is_enabled() { "Enabled" } else { "Disabled" };
        match self.resolver.toggle_key_name() {
            Some(key) => format!("Bengali Keyboard - {state} ({key} to toggle)"),
            None => format!("Bengali Keyboard - {state}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::LogicalKey;
    use crate::host::{RawVirtualKey, TextDocument};

    #[derive(Default)]
    struct RecordingSink {
        applied: Vec<(KeyEvent, EditAction)>,
    }

    impl EditActionSink for RecordingSink {
        fn apply(&mut self, event: &KeyEvent, action: &EditAction) {
            self.applied.push((*event, action.clone()));
        }
    }

    /// Sink that calls back into the engine while applying, the way
    /// injected keystrokes loop back through a keyboard hook.
    struct ReentrantSink<'e> {
        engine: &'e ImeEngine,
        saw_enabled: Vec<bool>,
    }

    impl EditActionSink for ReentrantSink<'_> {
        fn apply(&mut self, _event: &KeyEvent, action: &EditAction) {
            if let EditAction::Replace { .. } = action {
                self.saw_enabled.push(self.engine.is_enabled());
                self.engine.decide(&RawVirtualKey::new(0x4B), true);
            }
        }
    }

    fn letter(ch: char) -> RawVirtualKey {
        let upper = ch.to_ascii_uppercase() as u32;
        if ch.is_ascii_uppercase() {
            RawVirtualKey::shifted(upper)
        } else {
            RawVirtualKey::new(upper)
        }
    }

    fn type_word<S: EditActionSink>(engine: &ImeEngine, word: &str, sink: &mut S) {
        for ch in word.chars() {
            assert!(!engine.process(&letter(ch), true, sink));
            engine.process(&letter(ch), false, sink);
        }
    }

    fn enabled_engine() -> ImeEngine {
        ImeEngine::from_settings(&Settings {
            start_enabled: true,
            ..Settings::default()
        })
    }

    #[test]
    fn document_receives_converted_word() {
        let engine = enabled_engine();
        let mut doc = TextDocument::new();
        type_word(&engine, "ami", &mut doc);
        assert!(engine.process(&RawVirtualKey::new(0x20), true, &mut doc));
        type_word(&engine, "bangla", &mut doc);
        assert!(engine.process(&RawVirtualKey::new(0x0D), true, &mut doc));
        assert_eq!(doc.text(), "আমি বাংলা\n");
    }

    #[test]
    fn disabled_engine_types_roman_text() {
        let engine = ImeEngine::from_settings(&Settings::default());
        let mut doc = TextDocument::new();
        type_word(&engine, "ka", &mut doc);
        assert!(!engine.process(&RawVirtualKey::new(0x20), true, &mut doc));
        assert_eq!(doc.text(), "ka ");
    }

    #[test]
    fn toggle_key_is_swallowed_and_flips_state() {
        let engine = ImeEngine::from_settings(&Settings::default());
        let mut sink = RecordingSink::default();
        assert!(engine.process(&RawVirtualKey::new(0x79), true, &mut sink));
        assert!(engine.is_enabled());
        assert_eq!(
            sink.applied,
            vec![(KeyEvent::down(LogicalKey::ToggleHotkey), EditAction::Suppress)]
        );
    }

    #[test]
    fn unresolved_keys_skip_sink() {
        let engine = enabled_engine();
        let mut sink = RecordingSink::default();
        type_word(&engine, "ka", &mut sink);
        assert!(!engine.process(&RawVirtualKey::with_ctrl(0x43), true, &mut sink));
        assert_eq!(sink.applied.len(), 4);
        assert_eq!(engine.session().buffer(), "ka");
    }

    #[test]
    fn backspace_edits_word_before_conversion() {
        let engine = enabled_engine();
        let mut doc = TextDocument::new();
        type_word(&engine, "kat", &mut doc);
        engine.process(&RawVirtualKey::new(0x08), true, &mut doc);
        engine.process(&RawVirtualKey::new(0x20), true, &mut doc);
        assert_eq!(doc.text(), "কা ");
    }

    #[test]
    fn sink_may_reenter_engine() {
        let engine = enabled_engine();
        type_word(&engine, "ka", &mut RecordingSink::default());
        let mut sink = ReentrantSink {
            engine: &engine,
            saw_enabled: Vec::new(),
        };
        assert!(engine.process(&RawVirtualKey::new(0x20), true, &mut sink));
        assert_eq!(sink.saw_enabled, vec![true]);
        assert_eq!(engine.session().buffer(), "k");
    }

    #[test]
    fn status_text_tracks_state() {
        let engine = ImeEngine::from_settings(&Settings::default());
        assert_eq!(engine.status_text(), "Bengali Keyboard - Disabled (F10 to toggle)");
        engine.toggle();
        assert_eq!(engine.status_text(), "Bengali Keyboard - Enabled (F10 to toggle)");

        let engine = ImeEngine::new(InputSession::new(), VirtualKeyResolver::new(0x7B));
        assert_eq!(engine.status_text(), "Bengali Keyboard - Disabled (F12 to toggle)");
    }
}
