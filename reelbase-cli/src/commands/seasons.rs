use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbase_catalog::types::{Season, SeasonId};
use reelbase_db::CatalogError;

use crate::CliError;

use super::{App, or_dash, truncate_str};

pub(crate) struct NewSeason {
    pub show: String,
    pub number: i64,
    pub id: Option<SeasonId>,
    pub description: String,
    pub started: String,
    pub ended: String,
}

#[derive(Default)]
pub(crate) struct SeasonChanges {
    pub show: Option<String>,
    pub number: Option<i64>,
    pub description: Option<String>,
    pub started: Option<String>,
    pub ended: Option<String>,
}

impl SeasonChanges {
    fn is_empty(&self) -> bool {
        self.show.is_none()
            && self.number.is_none()
            && self.description.is_none()
            && self.started.is_none()
            && self.ended.is_none()
    }

    fn apply(self, season: &mut Season) {
        if let Some(show) = self.show {
            season.show_title = show;
        }
        if let Some(number) = self.number {
            season.season_number = number;
        }
        if let Some(description) = self.description {
            season.description = description;
        }
        if let Some(started) = self.started {
            season.date_started = started;
        }
        if let Some(ended) = self.ended {
            season.date_ended = ended;
        }
    }
}

pub(crate) fn run_season_list(app: &App, show: Option<&str>) -> Result<(), CliError> {
    app.session.require_user()?;

    let seasons: Vec<&Season> = match show {
        Some(title) => {
            if app.catalog.show(title).is_none() {
                log::warn!("No show titled '{}'", title);
            }
            app.catalog.seasons_for_show(title)
        }
        None => app.catalog.seasons().iter().collect(),
    };

    if seasons.is_empty() {
        log::info!("No seasons found.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!(
            "{:>4}  {:<26} {:>6}  {:<10}  {:<10}  {:>8}",
            "ID", "Show", "Season", "Started", "Ended", "Episodes"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for season in seasons {
        log::info!(
            "{:>4}  {:<26} {:>6}  {:<10}  {:<10}  {:>8}",
            season.season_id,
            truncate_str(&season.show_title, 26),
            season.season_number,
            or_dash(&season.date_started),
            or_dash(&season.date_ended),
            app.catalog.episodes_for_season(season.season_id).len(),
        );
    }
    Ok(())
}

pub(crate) fn run_season_add(app: &mut App, new: NewSeason) -> Result<(), CliError> {
    app.session.require_admin("add seasons")?;

    let season = Season {
        season_id: new.id.unwrap_or_else(|| app.catalog.next_season_id()),
        season_number: new.number,
        description: new.description,
        date_started: new.started,
        date_ended: new.ended,
        show_title: new.show,
    };
    let id = season.season_id;
    let label = format!("{} season {}", season.show_title, season.season_number);

    app.catalog.add_season(season)?;
    log::info!(
        "{} {} (id {})",
        "Added".if_supports_color(Stdout, |t| t.green()),
        label,
        id,
    );
    Ok(())
}

pub(crate) fn run_season_update(
    app: &mut App,
    id: SeasonId,
    changes: SeasonChanges,
) -> Result<(), CliError> {
    app.session.require_admin("edit seasons")?;
    if changes.is_empty() {
        return Err(CliError::input("nothing to change"));
    }

    let mut season = app
        .catalog
        .season(id)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Season", id))?;
    changes.apply(&mut season);

    app.catalog.update_season(season)?;
    log::info!("Updated season {}", id);
    Ok(())
}

pub(crate) fn run_season_delete(app: &mut App, id: SeasonId) -> Result<(), CliError> {
    app.session.require_admin("delete seasons")?;
    app.catalog.delete_season(id)?;
    log::info!(
        "{} season {}",
        "Deleted".if_supports_color(Stdout, |t| t.red()),
        id,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn changes_touch_only_given_fields() {
        let mut season = Season {
            season_id: 1,
            season_number: 1,
            description: "Old".to_string(),
            date_started: "2023-01-01".to_string(),
            date_ended: String::new(),
            show_title: "Galactic Horizons".to_string(),
        };
        let changes = SeasonChanges {
            ended: Some("2023-06-01".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
        changes.apply(&mut season);

        assert_eq!(season.date_ended, "2023-06-01");
        assert_eq!(season.description, "Old");
        assert_eq!(season.show_title, "Galactic Horizons");
        assert!(SeasonChanges::default().is_empty());
    }
}
