use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use reelbase_catalog::format_timestamp;
use reelbase_catalog::types::{EntityKind, Episode, EpisodeNumber, SeasonId};
use reelbase_db::CatalogError;

use crate::CliError;

use super::describe::generate_description;
use super::{App, or_dash, truncate_str};

pub(crate) struct NewEpisode {
    pub season: SeasonId,
    pub title: String,
    pub number: Option<EpisodeNumber>,
    pub description: Option<String>,
    pub generate: bool,
    pub rating: i64,
    pub published: String,
}

#[derive(Default)]
pub(crate) struct EpisodeChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i64>,
    pub published: Option<String>,
    pub season: Option<SeasonId>,
}

impl EpisodeChanges {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.rating.is_none()
            && self.published.is_none()
            && self.season.is_none()
    }

    fn apply(self, episode: &mut Episode) {
        if let Some(title) = self.title {
            episode.title = title;
        }
        if let Some(description) = self.description {
            episode.description = description;
        }
        if let Some(rating) = self.rating {
            episode.rating = rating;
        }
        if let Some(published) = self.published {
            episode.date_published = published;
        }
        if let Some(season) = self.season {
            episode.season_id = season;
        }
    }
}

pub(crate) fn run_episode_list(app: &App, season: Option<SeasonId>) -> Result<(), CliError> {
    app.session.require_user()?;

    let episodes: Vec<&Episode> = match season {
        Some(id) => app.catalog.episodes_for_season(id),
        None => app.catalog.episodes().iter().collect(),
    };

    if episodes.is_empty() {
        log::info!("No episodes found.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!(
            "{:>6}  {:<32} {:>6}  {:>6}  {:<10}",
            "Number", "Title", "Season", "Rating", "Published"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for episode in episodes {
        log::info!(
            "{:>6}  {:<32} {:>6}  {:>6}  {:<10}",
            episode.episode_number,
            truncate_str(&episode.title, 32),
            episode.season_id,
            format!("{}/10", episode.rating),
            or_dash(&episode.date_published),
        );
    }
    Ok(())
}

pub(crate) fn run_episode_add(app: &mut App, new: NewEpisode) -> Result<(), CliError> {
    app.session.require_admin("add episodes")?;

    let description = if new.generate {
        let text = generate_description(&new.title, EntityKind::Episode)?;
        log::info!("  {}", text.if_supports_color(Stdout, |t| t.dimmed()));
        text
    } else {
        new.description.unwrap_or_default()
    };

    let episode = Episode {
        episode_number: new
            .number
            .unwrap_or_else(|| app.catalog.next_episode_number()),
        title: new.title,
        description,
        rating: new.rating,
        date_published: new.published,
        season_id: new.season,
    };
    let number = episode.episode_number;
    let title = episode.title.clone();

    app.catalog.add_episode(episode)?;
    log::info!(
        "{} episode {} \"{}\"",
        "Added".if_supports_color(Stdout, |t| t.green()),
        number,
        title,
    );
    Ok(())
}

pub(crate) fn run_episode_update(
    app: &mut App,
    number: EpisodeNumber,
    changes: EpisodeChanges,
) -> Result<(), CliError> {
    app.session.require_admin("edit episodes")?;
    if changes.is_empty() {
        return Err(CliError::input("nothing to change"));
    }

    let mut episode = app
        .catalog
        .episode(number)
        .cloned()
        .ok_or_else(|| CatalogError::not_found("Episode", number))?;
    changes.apply(&mut episode);

    app.catalog.update_episode(episode)?;
    log::info!("Updated episode {}", number);
    Ok(())
}

pub(crate) fn run_episode_delete(app: &mut App, number: EpisodeNumber) -> Result<(), CliError> {
    app.session.require_admin("delete episodes")?;
    app.catalog.delete_episode(number)?;
    log::info!(
        "{} episode {}",
        "Deleted".if_supports_color(Stdout, |t| t.red()),
        number,
    );
    Ok(())
}

pub(crate) fn run_episode_detail(
    app: &App,
    number: EpisodeNumber,
    json: bool,
) -> Result<(), CliError> {
    app.session.require_user()?;

    let detail = app
        .catalog
        .get_detailed_episode(number)
        .ok_or_else(|| CatalogError::not_found("Episode", number))?;

    if json {
        let text = serde_json::to_string_pretty(&detail)
            .map_err(|e| CliError::other(format!("Failed to encode episode: {}", e)))?;
        println!("{}", text);
        return Ok(());
    }

    let episode = &detail.episode;
    let season = app.catalog.season(episode.season_id);
    log::info!(
        "{}",
        format!("{}. {}", episode.episode_number, episode.title)
            .if_supports_color(Stdout, |t| t.bold()),
    );
    if let Some(season) = season {
        log::info!(
            "  {} season {}",
            season.show_title.if_supports_color(Stdout, |t| t.cyan()),
            season.season_number,
        );
    }
    log::info!("  Rating:    {}/10", episode.rating);
    log::info!("  Published: {}", or_dash(&episode.date_published));
    if !episode.description.is_empty() {
        log::info!("  {}", episode.description);
    }

    crate::log_blank();
    log::info!("{}", "Screentime".if_supports_color(Stdout, |t| t.bold()));
    if detail.screen_times.is_empty() {
        log::info!("  {}", "none recorded".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for entry in &detail.screen_times {
        let st = &entry.screen_time;
        let actors: Vec<String> = entry.actors.iter().map(|a| a.full_name()).collect();
        log::info!(
            "  [{}] {} - {}  {} ({})",
            st.screen_time_id,
            format_timestamp(&st.start_time),
            format_timestamp(&st.end_time),
            or_dash(&st.role_name),
            or_dash(&st.role_type),
        );
        log::info!(
            "      {}",
            if actors.is_empty() {
                "-".to_string()
            } else {
                actors.join(", ")
            },
        );
    }

    crate::log_blank();
    log::info!("{}", "Crew".if_supports_color(Stdout, |t| t.bold()));
    if detail.crew.is_empty() {
        log::info!("  {}", "none assigned".if_supports_color(Stdout, |t| t.dimmed()));
    }
    for member in &detail.crew {
        log::info!(
            "  {:<24} {}",
            member.full_name(),
            or_dash(&member.role_definition),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn episode_changes_apply() {
        let mut episode = Episode {
            episode_number: 101,
            title: "Pilot".to_string(),
            description: String::new(),
            rating: 8,
            date_published: "2023-01-01".to_string(),
            season_id: 1,
        };
        EpisodeChanges {
            rating: Some(10),
            season: Some(2),
            ..Default::default()
        }
        .apply(&mut episode);

        assert_eq!(episode.rating, 10);
        assert_eq!(episode.season_id, 2);
        assert_eq!(episode.title, "Pilot");
        assert!(EpisodeChanges::default().is_empty());
    }
}
