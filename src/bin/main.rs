// Line-protocol bridge between a native keyboard hook process and the engine.
//
// Commands on stdin, one per line:
//   KEY <vk> <shift 0|1> <ctrl 0|1> <down 0|1>
//   TOGGLE
//   STATUS
//   EXIT
// Every KEY gets exactly one JSON line back, in order; TOGGLE and STATUS
// answer with the status text.
use ime_core::host::RawVirtualKey;
use ime_core::persistence::{default_settings_path, load_settings};
use ime_core::error::SettingsError;
use ime_core::settings::Settings;
use ime_core::trace_init::init_tracing;
use ime_core::core::types::KeyDecision;
use ime_core::ImeEngine;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

fn load_host_settings() -> Result<Settings, SettingsError> {
    let path = default_settings_path()?;
    load_settings(&path)
}

fn parse_flag(part: Option<&str>) -> Option<bool> {
    match part? {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

fn parse_key(parts: &[&str]) -> Option<(RawVirtualKey, bool)> {
    let vk_code = parts.get(1)?.parse().ok()?;
    let shift = parse_flag(parts.get(2).copied())?;
    let ctrl = parse_flag(parts.get(3).copied())?;
    let down = parse_flag(parts.get(4).copied())?;
    Some((RawVirtualKey { vk_code, shift, ctrl }, down))
}

fn handle_key_command(engine: &ImeEngine, parts: &[&str], stdout: &mut impl Write) -> io::Result<()> {
    let Some((raw, down)) = parse_key(parts) else {
        warn!(?parts, "malformed KEY command");
        return writeln!(stdout, "{}", serde_json::json!({ "error": "malformed KEY command" }));
    };

    let reply = KeyDecision::from(engine.decide(&raw, down));
    let line = serde_json::to_string(&reply).map_err(io::Error::other)?;
    debug!(%line, "reply");
    writeln!(stdout, "{line}")
}

fn main() -> io::Result<()> {
    // Logging is configured by the settings, so report load failures after.
    let loaded = load_host_settings();
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    init_tracing(&settings.log_filter);
    if let Err(e) = &loaded {
        warn!("using default settings: {e}");
    }
    info!("Bengali phonetic engine starting");

    let engine = ImeEngine::from_settings(&settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", engine.status_text())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let input = line?;
        let parts: Vec<&str> = input.split_whitespace().collect();
        let command = parts.first().copied().unwrap_or("");

        match command {
            "KEY" => handle_key_command(&engine, &parts, &mut stdout)?,
            "TOGGLE" => {
                engine.toggle();
                writeln!(stdout, "{}", engine.status_text())?;
            }
            "STATUS" => writeln!(stdout, "{}", engine.status_text())?,
            "EXIT" => {
                info!("received EXIT");
                break;
            }
            "" => continue,
            other => {
                warn!(command = other, "unknown command");
                writeln!(stdout, "{}", serde_json::json!({ "error": "unknown command" }))?;
            }
        }
        stdout.flush()?;
    }

    info!("shutting down");
    Ok(())
}
