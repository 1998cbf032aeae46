// Interactive terminal host: the terminal stands in for the keyboard hook and
// an in-memory document stands in for the focused application.
// Run with: cargo run --bin simulator
use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use ime_core::host::{KeyCodeResolver, TextDocument};
use ime_core::persistence::{default_settings_path, load_settings};
use ime_core::settings::Settings;
use ime_core::trace_init::init_tracing;
use ime_core::{ImeEngine, InputSession, LogicalKey};
use std::io::{self, Write};

const TOGGLE_FKEY: u8 = 10;

/// Maps terminal key events the way a hook would map virtual keys.
struct TerminalKeyResolver;

impl KeyCodeResolver for TerminalKeyResolver {
    type Raw = KeyEvent;

    fn resolve(&self, raw: &KeyEvent) -> Option<LogicalKey> {
        if raw.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        match raw.code {
            KeyCode::F(TOGGLE_FKEY) => Some(LogicalKey::ToggleHotkey),
            KeyCode::Char(c) => Some(LogicalKey::Char(c)),
            KeyCode::Enter => Some(LogicalKey::Char('\n')),
            KeyCode::Tab => Some(LogicalKey::Char('\t')),
            KeyCode::Backspace => Some(LogicalKey::Backspace),
            _ => None,
        }
    }

    fn toggle_key_name(&self) -> Option<String> {
        Some(format!("F{TOGGLE_FKEY}"))
    }
}

/// Restores the terminal however the loop exits.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn render(out: &mut impl Write, engine: &ImeEngine<TerminalKeyResolver>, doc: &TextDocument) -> io::Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetAttribute(Attribute::Bold),
        Print(engine.status_text()),
        SetAttribute(Attribute::Reset),
        Print("\r\nType phonetic Bengali; words convert on space, enter or tab. Esc quits.\r\n"),
        Print("---------------------------------------------------------------\r\n"),
    )?;
    for line in doc.text().split('\n') {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    queue!(
        out,
        Print("---------------------------------------------------------------\r\n"),
        Print(format!("Buffer: [{}]\r\n", engine.session().buffer())),
    )?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = default_settings_path()
        .and_then(|path| load_settings(&path))
        .unwrap_or_else(|_| Settings::default());
    init_tracing(&settings.log_filter);

    let engine = ImeEngine::new(InputSession::with_enabled(settings.start_enabled), TerminalKeyResolver);
    let mut doc = TextDocument::new();
    let mut stdout = io::stdout();

    let _guard = RawModeGuard::enable()?;
    render(&mut stdout, &engine, &doc)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.code == KeyCode::Esc {
            break;
        }
        let is_key_down = key.kind != KeyEventKind::Release;
        engine.process(&key, is_key_down, &mut doc);
        render(&mut stdout, &engine, &doc)?;
    }

    execute!(stdout, Print("\r\n"))?;
    Ok(())
}
