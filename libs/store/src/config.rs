//! Connection settings for the SQLite property store.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Default database file name.
pub const DEFAULT_DB_PATH: &str = "properties.db";

/// Default time a writer waits on a locked database.
const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors from loading store configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// SQLite `journal_mode` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JournalMode {
    Delete,
    Truncate,
    Persist,
    Memory,
    #[default]
    Wal,
    Off,
}

impl JournalMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
            Self::Truncate => "TRUNCATE",
            Self::Persist => "PERSIST",
            Self::Memory => "MEMORY",
            Self::Wal => "WAL",
            Self::Off => "OFF",
        }
    }
}

impl FromStr for JournalMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "delete" => Ok(Self::Delete),
            "truncate" => Ok(Self::Truncate),
            "persist" => Ok(Self::Persist),
            "memory" => Ok(Self::Memory),
            "wal" => Ok(Self::Wal),
            "off" => Ok(Self::Off),
            _ => Err(()),
        }
    }
}

/// SQLite `synchronous` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Synchronous {
    Off,
    #[default]
    Normal,
    Full,
    Extra,
}

impl Synchronous {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Normal => "NORMAL",
            Self::Full => "FULL",
            Self::Extra => "EXTRA",
        }
    }
}

impl FromStr for Synchronous {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "normal" => Ok(Self::Normal),
            "full" => Ok(Self::Full),
            "extra" => Ok(Self::Extra),
            _ => Err(()),
        }
    }
}

/// Property store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database file, created if missing.
    pub path: PathBuf,

    pub journal_mode: JournalMode,

    pub synchronous: Synchronous,

    /// How long a statement waits for a lock held by another connection.
    pub busy_timeout: Duration,
}

impl StoreConfig {
    /// Configuration for the given file with default pragmas.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            journal_mode: JournalMode::default(),
            synchronous: Synchronous::default(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// - `PROPSTORE_DB`: database path (default `properties.db`)
    /// - `PROPSTORE_JOURNAL_MODE`: `wal`, `delete`, ... (default `wal`)
    /// - `PROPSTORE_SYNCHRONOUS`: `off`, `normal`, `full`, `extra` (default `normal`)
    /// - `PROPSTORE_BUSY_TIMEOUT_MS`: lock wait in milliseconds (default 5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = lookup("PROPSTORE_DB").unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let mut config = Self::new(path);

        if let Some(raw) = lookup("PROPSTORE_JOURNAL_MODE") {
            config.journal_mode = parse_setting("PROPSTORE_JOURNAL_MODE", raw)?;
        }

        if let Some(raw) = lookup("PROPSTORE_SYNCHRONOUS") {
            config.synchronous = parse_setting("PROPSTORE_SYNCHRONOUS", raw)?;
        }

        if let Some(raw) = lookup("PROPSTORE_BUSY_TIMEOUT_MS") {
            let ms: u64 = parse_setting("PROPSTORE_BUSY_TIMEOUT_MS", raw)?;
            config.busy_timeout = Duration::from_millis(ms);
        }

        Ok(config)
    }
}

fn parse_setting<T: FromStr>(name: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { name, value: raw })
}
