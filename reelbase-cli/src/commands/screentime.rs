use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbase_catalog::parse_timestamp;
use reelbase_catalog::types::{ActorId, EpisodeNumber, ScreenTime, ScreenTimeId};
use reelbase_db::CatalogError;

use crate::CliError;

use super::App;

pub(crate) struct NewScreenTime {
    pub episode: EpisodeNumber,
    pub start: String,
    pub end: String,
    pub role_name: String,
    pub role_type: String,
    pub actors: Vec<ActorId>,
    pub id: Option<ScreenTimeId>,
}

pub(crate) fn run_screentime_add(app: &mut App, new: NewScreenTime) -> Result<(), CliError> {
    app.session.require_admin("record screentime")?;

    let start_time = parse_timestamp(&new.start).map_err(CatalogError::from)?;
    let end_time = parse_timestamp(&new.end).map_err(CatalogError::from)?;
    let screen_time = ScreenTime {
        screen_time_id: new.id.unwrap_or_else(|| app.catalog.next_screen_time_id()),
        start_time,
        end_time,
        role_name: new.role_name,
        role_type: new.role_type,
    };
    let id = screen_time.screen_time_id;

    let linked = app
        .catalog
        .add_screen_time(screen_time, new.episode, &new.actors)?;

    let skipped: Vec<ActorId> = new
        .actors
        .iter()
        .copied()
        .filter(|a| !linked.contains(a))
        .collect();
    if !skipped.is_empty() {
        log::warn!(
            "Skipped unknown actor ids: {}",
            skipped
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    log::info!(
        "{} screentime {} in episode {} with {} actor(s)",
        "Added".if_supports_color(Stdout, |t| t.green()),
        id,
        new.episode,
        linked.len(),
    );
    Ok(())
}

pub(crate) fn run_screentime_delete(app: &mut App, id: ScreenTimeId) -> Result<(), CliError> {
    app.session.require_admin("delete screentime")?;
    app.catalog.delete_screen_time(id)?;
    log::info!(
        "{} screentime {}",
        "Deleted".if_supports_color(Stdout, |t| t.red()),
        id,
    );
    Ok(())
}
