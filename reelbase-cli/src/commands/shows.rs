use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbase_catalog::types::{EntityKind, Show};

use crate::CliError;

use super::describe::generate_description;
use super::{App, or_dash, truncate_str};

pub(crate) fn run_show_list(app: &App, search: Option<&str>) -> Result<(), CliError> {
    app.session.require_user()?;

    let shows: Vec<&Show> = match search {
        Some(query) => app.catalog.search_shows(query),
        None => app.catalog.shows().iter().collect(),
    };

    if shows.is_empty() {
        log::info!("No shows found.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{:<30} {:>7}  {}", "Title", "Seasons", "Description")
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for show in shows {
        let seasons = app.catalog.seasons_for_show(&show.title).len();
        log::info!(
            "{:<30} {:>7}  {}",
            truncate_str(&show.title, 30),
            seasons,
            truncate_str(or_dash(&show.description), 60),
        );
    }
    Ok(())
}

/// Description from the flag, the AI model, or nothing.
fn resolve_description(
    title: &str,
    description: Option<String>,
    generate: bool,
) -> Result<Option<String>, CliError> {
    if generate {
        let text = generate_description(title, EntityKind::Show)?;
        log::info!("  {}", text.if_supports_color(Stdout, |t| t.dimmed()));
        Ok(Some(text))
    } else {
        Ok(description)
    }
}

pub(crate) fn run_show_add(
    app: &mut App,
    title: String,
    description: Option<String>,
    generate: bool,
) -> Result<(), CliError> {
    app.session.require_admin("add shows")?;
    let description = resolve_description(&title, description, generate)?.unwrap_or_default();

    app.catalog.add_show(Show {
        title: title.clone(),
        description,
    })?;
    log::info!(
        "{} {}",
        "Added show".if_supports_color(Stdout, |t| t.green()),
        title,
    );
    Ok(())
}

pub(crate) fn run_show_update(
    app: &mut App,
    title: String,
    description: Option<String>,
    generate: bool,
) -> Result<(), CliError> {
    app.session.require_admin("edit shows")?;
    let Some(description) = resolve_description(&title, description, generate)? else {
        return Err(CliError::input("nothing to change; pass --description or --generate"));
    };

    app.catalog.update_show(Show {
        title: title.clone(),
        description,
    })?;
    log::info!("Updated show {}", title);
    Ok(())
}

pub(crate) fn run_show_delete(app: &mut App, title: &str) -> Result<(), CliError> {
    app.session.require_admin("delete shows")?;
    app.catalog.delete_show(title)?;
    log::info!(
        "{} {}",
        "Deleted show".if_supports_color(Stdout, |t| t.red()),
        title,
    );
    Ok(())
}
