//! Settings file location and database path resolution.
//!
//! The settings file is `<config dir>/reelbase/settings.toml`. The CLI reads
//! `[storage]` from it; the `[describe]` table belongs to the description
//! generator.

use std::path::{Path, PathBuf};

use crate::CliError;

/// Environment variable overriding the database location.
pub(crate) const DB_ENV_VAR: &str = "REELBASE_DB";

/// Canonical path to the settings file: `~/.config/reelbase/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("reelbase").join("settings.toml")
}

/// Default database location: `<data dir>/reelbase/reelbase.db`.
pub(crate) fn default_db_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("reelbase").join("reelbase.db")
}

/// Where the database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DbSource {
    Flag,
    EnvVar,
    ConfigFile,
    Default,
}

impl std::fmt::Display for DbSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "--db"),
            Self::EnvVar => write!(f, "env ${}", DB_ENV_VAR),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Resolve the database path using a priority chain:
///
/// 1. `--db` flag (if `Some`)
/// 2. `REELBASE_DB` environment variable
/// 3. `storage.database` in `settings.toml`
/// 4. [`default_db_path`]
pub(crate) fn resolve_db_path(cli_override: Option<PathBuf>) -> (PathBuf, DbSource) {
    choose_db_path(
        cli_override,
        std::env::var_os(DB_ENV_VAR).map(PathBuf::from),
        load_storage_path(&settings_path()),
    )
}

fn choose_db_path(
    flag: Option<PathBuf>,
    env: Option<PathBuf>,
    file: Option<PathBuf>,
) -> (PathBuf, DbSource) {
    let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();
    if let Some(p) = flag.filter(non_empty) {
        return (p, DbSource::Flag);
    }
    if let Some(p) = env.filter(non_empty) {
        return (p, DbSource::EnvVar);
    }
    if let Some(p) = file {
        return (p, DbSource::ConfigFile);
    }
    (default_db_path(), DbSource::Default)
}

/// Read `storage.database` from a settings file, if set.
fn load_storage_path(path: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(path).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let db = doc.get("storage")?.get("database")?.as_str()?;
    if db.is_empty() {
        None
    } else {
        Some(PathBuf::from(db))
    }
}

/// Load the full settings file as a pretty-printed TOML string for display.
///
/// Returns `Ok(None)` when the file does not exist.
pub(crate) fn load_settings_string(path: &Path) -> Result<Option<String>, CliError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    let doc: toml::Value = contents
        .parse()
        .map_err(|e| CliError::config(format!("{}: {}", path.display(), e)))?;
    let pretty = toml::to_string_pretty(&doc).map_err(|e| CliError::config(e.to_string()))?;
    Ok(Some(pretty))
}
