//! Guarded mutations for every catalog entity type.
//!
//! Each operation checks uniqueness, foreign keys and child rows against the
//! current view before staging a commit. Deletes never cascade to other
//! entities: callers remove children first.

use reelbase_catalog::types::*;

use crate::catalog::{Catalog, Changes};
use crate::error::CatalogError;
use crate::index::has_children;
use crate::store::KeyValueStore;

impl<S: KeyValueStore> Catalog<S> {
    // ── Shows ───────────────────────────────────────────────────────────────

    pub fn add_show(&mut self, show: Show) -> Result<(), CatalogError> {
        if self.index.shows.contains_key(&show.title) {
            return Err(CatalogError::duplicate("Show", &show.title));
        }
        let mut shows = self.tables.shows.clone();
        shows.push(show);
        self.commit(Changes::default().shows(shows))
    }

    /// Replace the show with the same title.
    pub fn update_show(&mut self, show: Show) -> Result<(), CatalogError> {
        let pos = *self
            .index
            .shows
            .get(&show.title)
            .ok_or_else(|| CatalogError::not_found("Show", &show.title))?;
        let mut shows = self.tables.shows.clone();
        shows[pos] = show;
        self.commit(Changes::default().shows(shows))
    }

    pub fn delete_show(&mut self, title: &str) -> Result<(), CatalogError> {
        if has_children(&self.index.seasons_by_show, &title.to_string()) {
            return Err(CatalogError::constraint("Show", title, "existing seasons"));
        }
        if !self.index.shows.contains_key(title) {
            log::debug!("Show {} not present; nothing to delete", title);
            return Ok(());
        }
        let shows = self
            .tables
            .shows
            .iter()
            .filter(|s| s.title != title)
            .cloned()
            .collect();
        self.commit(Changes::default().shows(shows))
    }

    // ── Seasons ─────────────────────────────────────────────────────────────

    pub fn add_season(&mut self, season: Season) -> Result<(), CatalogError> {
        if !self.index.shows.contains_key(&season.show_title) {
            return Err(CatalogError::foreign_key("Season", "show", &season.show_title));
        }
        if self.index.seasons.contains_key(&season.season_id) {
            return Err(CatalogError::duplicate("Season", season.season_id));
        }
        let mut seasons = self.tables.seasons.clone();
        seasons.push(season);
        self.commit(Changes::default().seasons(seasons))
    }

    /// Replace the season with the same id. The show reference is re-checked.
    pub fn update_season(&mut self, season: Season) -> Result<(), CatalogError> {
        let pos = *self
            .index
            .seasons
            .get(&season.season_id)
            .ok_or_else(|| CatalogError::not_found("Season", season.season_id))?;
        if !self.index.shows.contains_key(&season.show_title) {
            return Err(CatalogError::foreign_key("Season", "show", &season.show_title));
        }
        let mut seasons = self.tables.seasons.clone();
        seasons[pos] = season;
        self.commit(Changes::default().seasons(seasons))
    }

    pub fn delete_season(&mut self, id: SeasonId) -> Result<(), CatalogError> {
        if has_children(&self.index.episodes_by_season, &id) {
            return Err(CatalogError::constraint("Season", id, "existing episodes"));
        }
        if !self.index.seasons.contains_key(&id) {
            log::debug!("Season {} not present; nothing to delete", id);
            return Ok(());
        }
        let seasons = self
            .tables
            .seasons
            .iter()
            .filter(|s| s.season_id != id)
            .cloned()
            .collect();
        self.commit(Changes::default().seasons(seasons))
    }

    // ── Episodes ────────────────────────────────────────────────────────────

    pub fn add_episode(&mut self, episode: Episode) -> Result<(), CatalogError> {
        if !self.index.seasons.contains_key(&episode.season_id) {
            return Err(CatalogError::foreign_key("Episode", "season", episode.season_id));
        }
        if self.index.episodes.contains_key(&episode.episode_number) {
            return Err(CatalogError::duplicate("Episode", episode.episode_number));
        }
        let mut episodes = self.tables.episodes.clone();
        episodes.push(episode);
        self.commit(Changes::default().episodes(episodes))
    }

    /// Replace the episode with the same number. The season reference is re-checked.
    pub fn update_episode(&mut self, episode: Episode) -> Result<(), CatalogError> {
        let pos = *self
            .index
            .episodes
            .get(&episode.episode_number)
            .ok_or_else(|| CatalogError::not_found("Episode", episode.episode_number))?;
        if !self.index.seasons.contains_key(&episode.season_id) {
            return Err(CatalogError::foreign_key("Episode", "season", episode.season_id));
        }
        let mut episodes = self.tables.episodes.clone();
        episodes[pos] = episode;
        self.commit(Changes::default().episodes(episodes))
    }

    pub fn delete_episode(&mut self, number: EpisodeNumber) -> Result<(), CatalogError> {
        if has_children(&self.index.screen_times_by_episode, &number)
            || has_children(&self.index.crew_by_episode, &number)
        {
            return Err(CatalogError::constraint(
                "Episode",
                number,
                "associated screentime or crew",
            ));
        }
        if !self.index.episodes.contains_key(&number) {
            log::debug!("Episode {} not present; nothing to delete", number);
            return Ok(());
        }
        let episodes = self
            .tables
            .episodes
            .iter()
            .filter(|e| e.episode_number != number)
            .cloned()
            .collect();
        self.commit(Changes::default().episodes(episodes))
    }

    // ── Cast ────────────────────────────────────────────────────────────────

    pub fn add_cast(&mut self, actor: CastMember) -> Result<(), CatalogError> {
        if self.index.cast.contains_key(&actor.actor_id) {
            return Err(CatalogError::duplicate("Actor", actor.actor_id));
        }
        let mut cast = self.tables.cast.clone();
        cast.push(actor);
        self.commit(Changes::default().cast(cast))
    }

    pub fn update_cast(&mut self, actor: CastMember) -> Result<(), CatalogError> {
        let pos = *self
            .index
            .cast
            .get(&actor.actor_id)
            .ok_or_else(|| CatalogError::not_found("Actor", actor.actor_id))?;
        let mut cast = self.tables.cast.clone();
        cast[pos] = actor;
        self.commit(Changes::default().cast(cast))
    }

    pub fn delete_cast(&mut self, id: ActorId) -> Result<(), CatalogError> {
        if has_children(&self.index.screen_times_by_actor, &id) {
            return Err(CatalogError::constraint("Actor", id, "screentime appearances"));
        }
        if !self.index.cast.contains_key(&id) {
            log::debug!("Actor {} not present; nothing to delete", id);
            return Ok(());
        }
        let cast = self
            .tables
            .cast
            .iter()
            .filter(|a| a.actor_id != id)
            .cloned()
            .collect();
        self.commit(Changes::default().cast(cast))
    }

    // ── Crew ────────────────────────────────────────────────────────────────

    pub fn add_crew(&mut self, member: CrewMember) -> Result<(), CatalogError> {
        if self.index.crew.contains_key(&member.crew_id) {
            return Err(CatalogError::duplicate("Crew member", member.crew_id));
        }
        let mut crew = self.tables.crew.clone();
        crew.push(member);
        self.commit(Changes::default().crew(crew))
    }

    pub fn update_crew(&mut self, member: CrewMember) -> Result<(), CatalogError> {
        let pos = *self
            .index
            .crew
            .get(&member.crew_id)
            .ok_or_else(|| CatalogError::not_found("Crew member", member.crew_id))?;
        let mut crew = self.tables.crew.clone();
        crew[pos] = member;
        self.commit(Changes::default().crew(crew))
    }

    pub fn delete_crew(&mut self, id: CrewId) -> Result<(), CatalogError> {
        if has_children(&self.index.episodes_by_crew, &id) {
            return Err(CatalogError::constraint("Crew member", id, "episode assignments"));
        }
        if !self.index.crew.contains_key(&id) {
            log::debug!("Crew member {} not present; nothing to delete", id);
            return Ok(());
        }
        let crew = self
            .tables
            .crew
            .iter()
            .filter(|c| c.crew_id != id)
            .cloned()
            .collect();
        self.commit(Changes::default().crew(crew))
    }

    /// Record that a crew member worked on an episode.
    pub fn assign_crew(&mut self, crew_id: CrewId, episode: EpisodeNumber) -> Result<(), CatalogError> {
        if !self.index.crew.contains_key(&crew_id) {
            return Err(CatalogError::foreign_key("Crew assignment", "crew member", crew_id));
        }
        if !self.index.episodes.contains_key(&episode) {
            return Err(CatalogError::foreign_key("Crew assignment", "episode", episode));
        }
        let link = CrewEpisode {
            crew_id,
            episode_number: episode,
        };
        if self.tables.crew_episodes.contains(&link) {
            return Err(CatalogError::duplicate(
                "Crew assignment",
                format!("{crew_id} -> {episode}"),
            ));
        }
        let mut links = self.tables.crew_episodes.clone();
        links.push(link);
        self.commit(Changes::default().crew_episodes(links))
    }

    pub fn unassign_crew(&mut self, crew_id: CrewId, episode: EpisodeNumber) -> Result<(), CatalogError> {
        let link = CrewEpisode {
            crew_id,
            episode_number: episode,
        };
        if !self.tables.crew_episodes.contains(&link) {
            return Err(CatalogError::not_found(
                "Crew assignment",
                format!("{crew_id} -> {episode}"),
            ));
        }
        let links = self
            .tables
            .crew_episodes
            .iter()
            .filter(|l| **l != link)
            .copied()
            .collect();
        self.commit(Changes::default().crew_episodes(links))
    }

    // ── Screentime ──────────────────────────────────────────────────────────

    /// Store a screentime segment, link it to `episode`, and link it to each
    /// actor in `actor_ids` that exists. Unknown actor ids are skipped.
    ///
    /// Returns the actor ids that were linked, in the order given.
    pub fn add_screen_time(
        &mut self,
        screen_time: ScreenTime,
        episode: EpisodeNumber,
        actor_ids: &[ActorId],
    ) -> Result<Vec<ActorId>, CatalogError> {
        if screen_time.end_time <= screen_time.start_time {
            return Err(CatalogError::InvalidRange {
                start: screen_time.start_time.to_string(),
                end: screen_time.end_time.to_string(),
            });
        }
        if !self.index.episodes.contains_key(&episode) {
            return Err(CatalogError::foreign_key("Screentime", "episode", episode));
        }
        if self.index.screen_times.contains_key(&screen_time.screen_time_id) {
            return Err(CatalogError::duplicate("Screentime", screen_time.screen_time_id));
        }

        let id = screen_time.screen_time_id;
        let mut linked: Vec<ActorId> = Vec::new();
        for actor_id in actor_ids {
            if !self.index.cast.contains_key(actor_id) {
                log::debug!("Skipping unknown actor {} for screentime {}", actor_id, id);
                continue;
            }
            if !linked.contains(actor_id) {
                linked.push(*actor_id);
            }
        }

        let mut screen_times = self.tables.screen_times.clone();
        screen_times.push(screen_time);
        let mut episode_links = self.tables.episode_screen_times.clone();
        episode_links.push(EpisodeScreenTime {
            episode_number: episode,
            screen_time_id: id,
        });
        let mut actor_links = self.tables.actor_screen_times.clone();
        actor_links.extend(linked.iter().map(|&actor_id| ActorScreenTime {
            actor_id,
            screen_time_id: id,
        }));

        self.commit(
            Changes::default()
                .screen_times(screen_times)
                .episode_screen_times(episode_links)
                .actor_screen_times(actor_links),
        )?;
        Ok(linked)
    }

    /// Remove a screentime segment together with its episode and actor links.
    pub fn delete_screen_time(&mut self, id: ScreenTimeId) -> Result<(), CatalogError> {
        if !self.index.screen_times.contains_key(&id) {
            return Err(CatalogError::not_found("Screentime", id));
        }
        let screen_times = self
            .tables
            .screen_times
            .iter()
            .filter(|st| st.screen_time_id != id)
            .cloned()
            .collect();
        let episode_links = self
            .tables
            .episode_screen_times
            .iter()
            .filter(|l| l.screen_time_id != id)
            .copied()
            .collect();
        let actor_links = self
            .tables
            .actor_screen_times
            .iter()
            .filter(|l| l.screen_time_id != id)
            .copied()
            .collect();
        self.commit(
            Changes::default()
                .screen_times(screen_times)
                .episode_screen_times(episode_links)
                .actor_screen_times(actor_links),
        )
    }

    // ── Id allocation ───────────────────────────────────────────────────────

    pub fn next_season_id(&self) -> SeasonId {
        next_id(self.tables.seasons.iter().map(|s| s.season_id))
    }

    pub fn next_episode_number(&self) -> EpisodeNumber {
        next_id(self.tables.episodes.iter().map(|e| e.episode_number))
    }

    pub fn next_actor_id(&self) -> ActorId {
        next_id(self.tables.cast.iter().map(|a| a.actor_id))
    }

    pub fn next_crew_id(&self) -> CrewId {
        next_id(self.tables.crew.iter().map(|c| c.crew_id))
    }

    pub fn next_screen_time_id(&self) -> ScreenTimeId {
        next_id(self.tables.screen_times.iter().map(|st| st.screen_time_id))
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max.saturating_add(1))
}
