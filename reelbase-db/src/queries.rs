//! Read queries and the denormalized episode-detail join.

use reelbase_catalog::types::*;

use crate::catalog::Catalog;
use crate::index::ordered_positions;
use crate::store::KeyValueStore;

/// How many entries the dashboard lists show.
const DASHBOARD_LIST_LEN: usize = 5;

/// Summary counts and highlights for the landing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub shows: usize,
    pub episodes: usize,
    pub cast: usize,
    pub crew: usize,
    /// Newest first.
    pub recent_shows: Vec<Show>,
    /// Highest rating first; equal ratings keep insertion order.
    pub top_episodes: Vec<Episode>,
}

impl<S: KeyValueStore> Catalog<S> {
    pub fn shows(&self) -> &[Show] {
        &self.tables.shows
    }

    pub fn show(&self, title: &str) -> Option<&Show> {
        self.index.shows.get(title).map(|&pos| &self.tables.shows[pos])
    }

    /// Shows whose title contains `query`, ignoring case.
    pub fn search_shows(&self, query: &str) -> Vec<&Show> {
        let needle = query.to_lowercase();
        self.tables
            .shows
            .iter()
            .filter(|s| s.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn seasons(&self) -> &[Season] {
        &self.tables.seasons
    }

    pub fn season(&self, id: SeasonId) -> Option<&Season> {
        self.index.seasons.get(&id).map(|&pos| &self.tables.seasons[pos])
    }

    pub fn seasons_for_show(&self, title: &str) -> Vec<&Season> {
        self.index
            .seasons_by_show
            .get(title)
            .map(|positions| positions.iter().map(|&pos| &self.tables.seasons[pos]).collect())
            .unwrap_or_default()
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.tables.episodes
    }

    pub fn episode(&self, number: EpisodeNumber) -> Option<&Episode> {
        self.index
            .episodes
            .get(&number)
            .map(|&pos| &self.tables.episodes[pos])
    }

    pub fn episodes_for_season(&self, id: SeasonId) -> Vec<&Episode> {
        self.index
            .episodes_by_season
            .get(&id)
            .map(|positions| positions.iter().map(|&pos| &self.tables.episodes[pos]).collect())
            .unwrap_or_default()
    }

    pub fn cast(&self) -> &[CastMember] {
        &self.tables.cast
    }

    pub fn actor(&self, id: ActorId) -> Option<&CastMember> {
        self.index.cast.get(&id).map(|&pos| &self.tables.cast[pos])
    }

    pub fn crew(&self) -> &[CrewMember] {
        &self.tables.crew
    }

    pub fn crew_member(&self, id: CrewId) -> Option<&CrewMember> {
        self.index.crew.get(&id).map(|&pos| &self.tables.crew[pos])
    }

    pub fn screen_times(&self) -> &[ScreenTime] {
        &self.tables.screen_times
    }

    /// Crew members assigned to an episode, in crew collection order.
    pub fn crew_for_episode(&self, number: EpisodeNumber) -> Vec<CrewMember> {
        let ids = self
            .index
            .crew_by_episode
            .get(&number)
            .map(Vec::as_slice)
            .unwrap_or_default();
        ordered_positions(ids, &self.index.crew)
            .into_iter()
            .map(|pos| self.tables.crew[pos].clone())
            .collect()
    }

    /// Assemble the episode with its screentimes (each with its actors) and crew.
    ///
    /// Lists follow the insertion order of the underlying collections and
    /// contain each record once. Returns `None` for an unknown episode.
    pub fn get_detailed_episode(&self, number: EpisodeNumber) -> Option<DetailedEpisode> {
        let episode = self.episode(number)?.clone();

        let screen_time_ids = self
            .index
            .screen_times_by_episode
            .get(&number)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let screen_times = ordered_positions(screen_time_ids, &self.index.screen_times)
            .into_iter()
            .map(|pos| {
                let screen_time = self.tables.screen_times[pos].clone();
                let actor_ids = self
                    .index
                    .actors_by_screen_time
                    .get(&screen_time.screen_time_id)
                    .map(Vec::as_slice)
                    .unwrap_or_default();
                let actors = ordered_positions(actor_ids, &self.index.cast)
                    .into_iter()
                    .map(|pos| self.tables.cast[pos].clone())
                    .collect();
                ScreenTimeDetail {
                    screen_time,
                    actors,
                }
            })
            .collect();

        Some(DetailedEpisode {
            episode,
            screen_times,
            crew: self.crew_for_episode(number),
        })
    }

    pub fn dashboard(&self) -> Dashboard {
        let recent_shows = self
            .tables
            .shows
            .iter()
            .rev()
            .take(DASHBOARD_LIST_LEN)
            .cloned()
            .collect();

        let mut ranked: Vec<&Episode> = self.tables.episodes.iter().collect();
        // Stable sort keeps insertion order among equal ratings.
        ranked.sort_by(|a, b| b.rating.cmp(&a.rating));
        let top_episodes = ranked
            .into_iter()
            .take(DASHBOARD_LIST_LEN)
            .cloned()
            .collect();

        Dashboard {
            shows: self.tables.shows.len(),
            episodes: self.tables.episodes.len(),
            cast: self.tables.cast.len(),
            crew: self.tables.crew.len(),
            recent_shows,
            top_episodes,
        }
    }
}
