// File: src/persistence.rs
use crate::error::SettingsError;
use crate::settings::Settings;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

const APP_DIR: &str = "bangla-phonetic-ime";
const SETTINGS_FILE: &str = "settings.toml";

/// `<config dir>/bangla-phonetic-ime/settings.toml`
pub fn default_settings_path() -> Result<PathBuf, SettingsError> {
    let mut path = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
    path.push(APP_DIR);
    path.push(SETTINGS_FILE);
    Ok(path)
}

/// Loads settings from `path`. A missing file yields the defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    match fs::read_to_string(path) {
        Ok(content) => Settings::from_toml(&content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Settings::default())
        }
        Err(source) => Err(SettingsError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes settings to a temp file next to `path` and renames it into place,
/// so readers never see a half-written file.
pub fn save_settings(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let write_err = |source| SettingsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir).map_err(write_err)?;

    let content = settings.to_toml()?;
    let mut temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
    temp_file.write_all(content.as_bytes()).map_err(write_err)?;
    temp_file.persist(path).map_err(|e| write_err(e.error))?;

    info!(path = %path.display(), "settings saved");
    Ok(())
}
