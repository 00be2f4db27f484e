//! Seed data: the built-in first-run catalog and the shape of YAML seed files.

use serde::{Deserialize, Serialize};

use crate::types::{CastMember, CrewMember, Episode, Season, Show};

/// A bundle of catalog records to load in one go.
///
/// Records are applied in dependency order: shows, seasons, episodes, cast, crew.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCatalog {
    #[serde(default)]
    pub shows: Vec<Show>,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    #[serde(default)]
    pub cast: Vec<CastMember>,
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

impl SeedCatalog {
    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
            && self.seasons.is_empty()
            && self.episodes.is_empty()
            && self.cast.is_empty()
            && self.crew.is_empty()
    }
}

/// The catalog written on first run.
pub fn default_catalog() -> SeedCatalog {
    SeedCatalog {
        shows: vec![
            show("Galactic Horizons", "A journey through the cosmos."),
            show("Urban Legends", "Myths coming to life in the city."),
        ],
        seasons: vec![
            Season {
                season_id: 1,
                season_number: 1,
                description: "The Beginning".to_string(),
                date_started: "2023-01-01".to_string(),
                date_ended: "2023-03-01".to_string(),
                show_title: "Galactic Horizons".to_string(),
            },
            Season {
                season_id: 2,
                season_number: 2,
                description: "The Expansion".to_string(),
                date_started: "2024-01-01".to_string(),
                date_ended: "2024-03-01".to_string(),
                show_title: "Galactic Horizons".to_string(),
            },
        ],
        episodes: vec![
            Episode {
                episode_number: 101,
                title: "Pilot".to_string(),
                description: "Launch day.".to_string(),
                rating: 8,
                date_published: "2023-01-01".to_string(),
                season_id: 1,
            },
            Episode {
                episode_number: 102,
                title: "First Contact".to_string(),
                description: "We are not alone.".to_string(),
                rating: 9,
                date_published: "2023-01-08".to_string(),
                season_id: 1,
            },
        ],
        cast: vec![
            CastMember {
                actor_id: 1,
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
            },
            CastMember {
                actor_id: 2,
                first_name: "Jane".to_string(),
                last_name: "Smith".to_string(),
            },
        ],
        crew: vec![CrewMember {
            crew_id: 1,
            first_name: "Alice".to_string(),
            last_name: "Director".to_string(),
            role_definition: "Director".to_string(),
        }],
    }
}

fn show(title: &str, description: &str) -> Show {
    Show {
        title: title.to_string(),
        description: description.to_string(),
    }
}
