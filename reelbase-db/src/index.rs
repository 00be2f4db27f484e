//! Key and foreign-key indexes over the in-memory collections.
//!
//! Rebuilt from scratch after every commit and reload. Positions refer to the
//! collection vectors in [`Tables`]; when stored data contains a repeated key
//! the first occurrence wins.

use std::collections::HashMap;
use std::hash::Hash;

use reelbase_catalog::types::*;

use crate::catalog::Tables;

#[derive(Debug, Default)]
pub(crate) struct Index {
    pub shows: HashMap<String, usize>,
    pub seasons: HashMap<SeasonId, usize>,
    pub episodes: HashMap<EpisodeNumber, usize>,
    pub cast: HashMap<ActorId, usize>,
    pub crew: HashMap<CrewId, usize>,
    pub screen_times: HashMap<ScreenTimeId, usize>,
    pub users: HashMap<String, usize>,

    /// Show title -> positions in `seasons`.
    pub seasons_by_show: HashMap<String, Vec<usize>>,
    /// Season id -> positions in `episodes`.
    pub episodes_by_season: HashMap<SeasonId, Vec<usize>>,
    pub screen_times_by_episode: HashMap<EpisodeNumber, Vec<ScreenTimeId>>,
    pub episodes_by_screen_time: HashMap<ScreenTimeId, Vec<EpisodeNumber>>,
    pub actors_by_screen_time: HashMap<ScreenTimeId, Vec<ActorId>>,
    pub screen_times_by_actor: HashMap<ActorId, Vec<ScreenTimeId>>,
    pub crew_by_episode: HashMap<EpisodeNumber, Vec<CrewId>>,
    pub episodes_by_crew: HashMap<CrewId, Vec<EpisodeNumber>>,
}

impl Index {
    pub fn build(tables: &Tables) -> Self {
        let mut index = Index {
            shows: positions(&tables.shows, |s| s.title.clone()),
            seasons: positions(&tables.seasons, |s| s.season_id),
            episodes: positions(&tables.episodes, |e| e.episode_number),
            cast: positions(&tables.cast, |a| a.actor_id),
            crew: positions(&tables.crew, |c| c.crew_id),
            screen_times: positions(&tables.screen_times, |st| st.screen_time_id),
            users: positions(&tables.users, |u| u.username.clone()),
            ..Default::default()
        };

        for (pos, season) in tables.seasons.iter().enumerate() {
            index
                .seasons_by_show
                .entry(season.show_title.clone())
                .or_default()
                .push(pos);
        }
        for (pos, episode) in tables.episodes.iter().enumerate() {
            index
                .episodes_by_season
                .entry(episode.season_id)
                .or_default()
                .push(pos);
        }
        for link in &tables.episode_screen_times {
            push(&mut index.screen_times_by_episode, link.episode_number, link.screen_time_id);
            push(&mut index.episodes_by_screen_time, link.screen_time_id, link.episode_number);
        }
        for link in &tables.actor_screen_times {
            push(&mut index.actors_by_screen_time, link.screen_time_id, link.actor_id);
            push(&mut index.screen_times_by_actor, link.actor_id, link.screen_time_id);
        }
        for link in &tables.crew_episodes {
            push(&mut index.crew_by_episode, link.episode_number, link.crew_id);
            push(&mut index.episodes_by_crew, link.crew_id, link.episode_number);
        }

        index
    }
}

fn positions<T, K, F>(rows: &[T], key: F) -> HashMap<K, usize>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut map = HashMap::with_capacity(rows.len());
    for (pos, row) in rows.iter().enumerate() {
        map.entry(key(row)).or_insert(pos);
    }
    map
}

fn push<K: Eq + Hash, V>(map: &mut HashMap<K, Vec<V>>, key: K, value: V) {
    map.entry(key).or_default().push(value);
}

/// Resolve ids to collection positions, in collection order, each position once.
///
/// Ids with no matching record are skipped.
pub(crate) fn ordered_positions<K: Eq + Hash>(ids: &[K], lookup: &HashMap<K, usize>) -> Vec<usize> {
    let mut found: Vec<usize> = ids.iter().filter_map(|id| lookup.get(id).copied()).collect();
    found.sort_unstable();
    found.dedup();
    found
}

/// True when `map[key]` exists and is non-empty.
pub(crate) fn has_children<K: Eq + Hash, V>(map: &HashMap<K, Vec<V>>, key: &K) -> bool {
    map.get(key).is_some_and(|children| !children.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordered_positions_follow_collection_order() {
        let lookup: HashMap<i64, usize> = [(30, 0), (10, 1), (20, 2)].into_iter().collect();
        assert_eq!(ordered_positions(&[20, 30, 20, 99], &lookup), vec![0, 2]);
    }

    #[test]
    fn first_occurrence_wins_for_repeated_keys() {
        let rows = vec![(1, "a"), (2, "b"), (1, "c")];
        let map = positions(&rows, |r| r.0);
        assert_eq!(map[&1], 0);
        assert_eq!(map[&2], 1);
    }
}
