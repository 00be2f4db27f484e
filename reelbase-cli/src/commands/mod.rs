pub(crate) mod config;
pub(crate) mod dashboard;
pub(crate) mod describe;
pub(crate) mod episodes;
pub(crate) mod import;
pub(crate) mod people;
pub(crate) mod screentime;
pub(crate) mod seasons;
pub(crate) mod session;
pub(crate) mod shows;
pub(crate) mod users;

use std::io::Write;
use std::path::PathBuf;

use reelbase_db::{Catalog, Session, SqliteStore};

use crate::CliError;

/// Open catalog plus the restored session, shared by every data command.
pub(crate) struct App {
    pub catalog: Catalog<SqliteStore>,
    pub session: Session,
}

impl App {
    /// Open the store, seed it on first run and restore the session.
    pub(crate) fn open(db_path: PathBuf) -> Result<Self, CliError> {
        let store = SqliteStore::open(&db_path).map_err(|e| {
            CliError::database(format!("Failed to open {}: {}", db_path.display(), e))
        })?;
        log::debug!("Using database {}", db_path.display());

        let mut catalog = Catalog::open(store)?;
        let report = catalog.initialize()?;
        if report.users_seeded {
            log::info!("Default accounts: admin/admin (ADMIN), user/user (USER)");
        }
        let session = Session::restore(&catalog)?;

        Ok(Self { catalog, session })
    }
}

/// Read one line from stdin after printing `prompt`.
pub(crate) fn read_line(prompt: &str) -> Result<String, CliError> {
    print!("{}: ", prompt);
    std::io::stdout().flush()?;
    let mut input = String::new();
    let read = std::io::stdin().read_line(&mut input)?;
    if read == 0 {
        return Err(CliError::input(format!("no input for {}", prompt.to_lowercase())));
    }
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// The password given on the command line, or one read from stdin.
pub(crate) fn password_or_prompt(flag: Option<String>) -> Result<String, CliError> {
    match flag {
        Some(password) => Ok(password),
        None => read_line("Password"),
    }
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max).collect()
    }
}

/// `value` or a dash for blank fields.
pub(crate) fn or_dash(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_characters() {
        assert_eq!(truncate_str("short", 10), "short");
        assert_eq!(truncate_str("Galactic Horizons", 10), "Galacti...");
        assert_eq!(truncate_str("ééééé", 4), "é...");
        assert_eq!(truncate_str("abcdef", 2), "ab");
    }

    #[test]
    fn blank_fields_show_dash() {
        assert_eq!(or_dash(""), "-");
        assert_eq!(or_dash("  "), "-");
        assert_eq!(or_dash("2023-01-01"), "2023-01-01");
    }
}
