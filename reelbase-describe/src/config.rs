use std::path::Path;

use crate::error::DescribeError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MAX_CHARS: usize = 200;

/// Environment variables checked for the API key, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Settings for the description generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub max_chars: usize,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

/// Where the API key came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeySource {
    EnvVar(&'static str),
    ConfigFile,
    Missing,
}

impl std::fmt::Display for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Missing => write!(f, "not set"),
        }
    }
}

/// `[describe]` table of the settings file.
#[derive(Debug, Default, serde::Deserialize)]
struct SettingsFile {
    describe: Option<DescribeSection>,
}

#[derive(Debug, Default, Clone, serde::Deserialize)]
struct DescribeSection {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    max_chars: Option<usize>,
}

impl DescribeConfig {
    /// Load settings from the environment, the settings file, or defaults.
    ///
    /// Priority: env vars > `[describe]` table in `settings` > defaults.
    /// A missing or unreadable settings file is treated as empty.
    pub fn load(settings: Option<&Path>) -> Self {
        let section = settings.and_then(load_section);
        Self::resolve(|var| std::env::var(var).ok(), section)
    }

    /// Like [`load`](Self::load), but a settings file that exists and does not
    /// parse is an error.
    pub fn load_strict(settings: &Path) -> Result<Self, DescribeError> {
        let section = if settings.exists() {
            let content = std::fs::read_to_string(settings)?;
            let file: SettingsFile = toml::from_str(&content).map_err(|e| {
                DescribeError::Config(format!("{}: {}", settings.display(), e))
            })?;
            file.describe
        } else {
            None
        };
        Ok(Self::resolve(|var| std::env::var(var).ok(), section))
    }

    fn resolve(env: impl Fn(&str) -> Option<String>, section: Option<DescribeSection>) -> Self {
        let section = section.unwrap_or_default();
        let defaults = Self::default();

        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| non_blank(env(var)))
            .or_else(|| non_blank(section.api_key));

        Self {
            api_key,
            model: section.model.unwrap_or(defaults.model),
            base_url: section.base_url.unwrap_or(defaults.base_url),
            max_chars: section.max_chars.unwrap_or(defaults.max_chars),
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

/// Determine where the API key is coming from.
pub fn key_source(settings: Option<&Path>) -> KeySource {
    let section = settings.and_then(load_section);
    source_of(|var| std::env::var(var).ok(), section.as_ref())
}

fn source_of(env: impl Fn(&str) -> Option<String>, section: Option<&DescribeSection>) -> KeySource {
    if let Some(var) = API_KEY_VARS.iter().find(|var| non_blank(env(var)).is_some()) {
        KeySource::EnvVar(*var)
    } else if non_blank(section.and_then(|s| s.api_key.clone())).is_some() {
        KeySource::ConfigFile
    } else {
        KeySource::Missing
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn load_section(path: &Path) -> Option<DescribeSection> {
    let content = std::fs::read_to_string(path).ok()?;
    let file: SettingsFile = toml::from_str(&content).ok()?;
    file.describe
}
