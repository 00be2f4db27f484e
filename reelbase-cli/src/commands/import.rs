use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::App;

/// Import a YAML seed file through the guarded add operations.
pub(crate) fn run_import(app: &mut App, path: &Path) -> Result<(), CliError> {
    app.session.require_admin("import data")?;

    let seed = reelbase_catalog::load_seed_file(path)
        .map_err(|e| CliError::other(format!("Failed to load {}: {}", path.display(), e)))?;
    if seed.is_empty() {
        log::warn!("{} contains no records", path.display());
        return Ok(());
    }

    log::info!(
        "Importing {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    let stats = app.catalog.import_seed(seed)?;

    log::info!(
        "{}",
        "Import complete".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Shows:     {:>6}", stats.shows);
    log::info!("  Seasons:   {:>6}", stats.seasons);
    log::info!("  Episodes:  {:>6}", stats.episodes);
    log::info!("  Cast:      {:>6}", stats.cast);
    log::info!("  Crew:      {:>6}", stats.crew);
    if stats.skipped > 0 {
        log::info!(
            "  {}",
            format!("{} existing record(s) skipped", stats.skipped)
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}
