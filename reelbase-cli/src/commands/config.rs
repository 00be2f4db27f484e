use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbase_describe::{DescribeConfig, KeySource};

use crate::CliError;
use crate::settings::{load_settings_string, resolve_db_path, settings_path};

fn mask_value(s: &str) -> String {
    let head: String = s.chars().take(4).collect();
    if s.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("{}****", head)
    }
}

/// Show resolved settings and where each value came from.
pub(crate) fn run_config_show(db_flag: Option<PathBuf>) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "reelbase Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let (db_path, db_source) = resolve_db_path(db_flag);
    log::info!(
        "  Database:      {} {}",
        db_path.display(),
        format!("({})", db_source).if_supports_color(Stdout, |t| t.dimmed()),
    );

    crate::log_blank();
    let describe = DescribeConfig::load(Some(&path));
    let key_source = reelbase_describe::key_source(Some(&path));
    let key = match &describe.api_key {
        Some(key) => mask_value(key),
        None => format!("{}", "not set".if_supports_color(Stdout, |t| t.red())),
    };
    log::info!(
        "  API key:       {} {}",
        key,
        format!("({})", key_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  Model:         {}", describe.model);
    log::info!("  Endpoint:      {}", describe.base_url);
    log::info!("  Max chars:     {}", describe.max_chars);
    if key_source == KeySource::Missing {
        log::info!(
            "  {}",
            "Set GEMINI_API_KEY or add api_key under [describe] to enable AI descriptions."
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if let Some(contents) = load_settings_string(&path)? {
        crate::log_blank();
        log::info!("{}", "Settings file contents".if_supports_color(Stdout, |t| t.bold()));
        for line in contents.lines() {
            // Keys are shown masked above.
            if line.trim_start().starts_with("api_key") {
                log::info!("  api_key = \"****\"");
            } else {
                log::info!("  {}", line);
            }
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings_path().display());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_keeps_only_a_prefix() {
        assert_eq!(mask_value("AIzaSyExample"), "AIza****");
        assert_eq!(mask_value("abc"), "****");
    }
}
