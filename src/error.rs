// File: src/error.rs
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("pattern table is empty")]
    Empty,
    #[error("empty pattern")]
    EmptyPattern,
    #[error("non-ASCII pattern: {0}")]
    NonAsciiPattern(String),
    #[error("empty script output for pattern: {0}")]
    EmptyScript(String),
    #[error("duplicate pattern: {0}")]
    DuplicatePattern(String),
    #[error("inherent vowel pattern {0:?} is not declared as a vowel")]
    InherentNotVowel(String),
    #[error("inherent vowel pattern {0:?} must have an empty diacritic")]
    InherentHasDiacritic(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("no config directory available on this platform")]
    NoConfigDir,
}
