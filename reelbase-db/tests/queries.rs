use reelbase_catalog::types::*;
use reelbase_catalog::parse_timestamp;
use reelbase_db::*;

fn seeded() -> Catalog<MemoryStore> {
    let mut catalog = Catalog::open(MemoryStore::new()).unwrap();
    catalog.initialize().unwrap();
    catalog
}

fn screen_time(id: ScreenTimeId, start: &str, end: &str) -> ScreenTime {
    ScreenTime {
        screen_time_id: id,
        start_time: parse_timestamp(start).unwrap(),
        end_time: parse_timestamp(end).unwrap(),
        role_name: format!("Role {}", id),
        role_type: "Guest".to_string(),
    }
}

#[test]
fn detailed_episode_without_links_is_bare() {
    let catalog = seeded();
    let detail = catalog.get_detailed_episode(101).unwrap();
    assert_eq!(detail.episode.title, "Pilot");
    assert!(detail.screen_times.is_empty());
    assert!(detail.crew.is_empty());
}

#[test]
fn detailed_episode_unknown_is_none() {
    let catalog = seeded();
    assert!(catalog.get_detailed_episode(404).is_none());
}

#[test]
fn detailed_episode_joins_actors_and_crew() {
    let mut catalog = seeded();
    catalog
        .add_screen_time(screen_time(1, "2023-01-01T10:00", "2023-01-01T10:05"), 101, &[2, 1])
        .unwrap();
    catalog
        .add_screen_time(screen_time(2, "2023-01-01T10:10", "2023-01-01T10:20"), 101, &[2])
        .unwrap();
    catalog
        .add_screen_time(screen_time(3, "2023-01-01T11:00", "2023-01-01T11:05"), 102, &[1])
        .unwrap();
    catalog.assign_crew(1, 101).unwrap();

    let detail = catalog.get_detailed_episode(101).unwrap();
    let ids: Vec<_> = detail
        .screen_times
        .iter()
        .map(|st| st.screen_time.screen_time_id)
        .collect();
    assert_eq!(ids, vec![1, 2]);

    // Actors follow cast collection order, not the order they were linked.
    let first_actors: Vec<_> = detail.screen_times[0]
        .actors
        .iter()
        .map(|a| a.actor_id)
        .collect();
    assert_eq!(first_actors, vec![1, 2]);
    assert_eq!(detail.screen_times[1].actors.len(), 1);
    assert_eq!(detail.screen_times[1].actors[0].full_name(), "Jane Smith");

    assert_eq!(detail.crew.len(), 1);
    assert_eq!(detail.crew[0].role_definition, "Director");

    let other = catalog.get_detailed_episode(102).unwrap();
    assert_eq!(other.screen_times.len(), 1);
    assert!(other.crew.is_empty());
}

#[test]
fn detailed_episode_is_idempotent() {
    let mut catalog = seeded();
    catalog
        .add_screen_time(screen_time(1, "2023-01-01T10:00", "2023-01-01T10:05"), 102, &[1, 2])
        .unwrap();
    catalog.assign_crew(1, 102).unwrap();

    let first = catalog.get_detailed_episode(102).unwrap();
    let second = catalog.get_detailed_episode(102).unwrap();
    assert_eq!(first, second);
}

#[test]
fn detailed_episode_serializes_with_nested_lists() {
    let mut catalog = seeded();
    catalog
        .add_screen_time(screen_time(1, "2023-01-01T10:00", "2023-01-01T10:05"), 101, &[1])
        .unwrap();
    let detail = catalog.get_detailed_episode(101).unwrap();
    let json = serde_json::to_value(&detail).unwrap();

    assert_eq!(json["EpisodeNumber"], 101);
    assert_eq!(json["screenTimes"][0]["ScreenTimeID"], 1);
    assert_eq!(json["screenTimes"][0]["actors"][0]["ActorsFirstName"], "John");
    assert!(json["crew"].as_array().unwrap().is_empty());
}

#[test]
fn lookups_by_parent() {
    let catalog = seeded();
    let seasons: Vec<_> = catalog
        .seasons_for_show("Galactic Horizons")
        .iter()
        .map(|s| s.season_id)
        .collect();
    assert_eq!(seasons, vec![1, 2]);
    assert!(catalog.seasons_for_show("Urban Legends").is_empty());

    let episodes: Vec<_> = catalog
        .episodes_for_season(1)
        .iter()
        .map(|e| e.episode_number)
        .collect();
    assert_eq!(episodes, vec![101, 102]);
    assert!(catalog.episodes_for_season(2).is_empty());
}

#[test]
fn search_is_case_insensitive_substring() {
    let catalog = seeded();
    let hits: Vec<_> = catalog
        .search_shows("LEGEND")
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(hits, vec!["Urban Legends"]);
    assert_eq!(catalog.search_shows("").len(), 2);
    assert!(catalog.search_shows("zzz").is_empty());
}

#[test]
fn dashboard_counts_and_rankings() {
    let mut catalog = seeded();
    for (i, rating) in [7, 9, 3, 9].into_iter().enumerate() {
        catalog
            .add_episode(Episode {
                episode_number: 200 + i as i64,
                title: format!("Extra {}", i),
                description: String::new(),
                rating,
                date_published: String::new(),
                season_id: 2,
            })
            .unwrap();
    }
    for title in ["A", "B", "C", "D", "E"] {
        catalog
            .add_show(Show {
                title: title.to_string(),
                description: String::new(),
            })
            .unwrap();
    }

    let dash = catalog.dashboard();
    assert_eq!(dash.shows, 7);
    assert_eq!(dash.episodes, 6);
    assert_eq!(dash.cast, 2);
    assert_eq!(dash.crew, 1);

    let recent: Vec<_> = dash.recent_shows.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(recent, vec!["E", "D", "C", "B", "A"]);

    // Ties keep insertion order: 102 was added before 201 and 203.
    let top: Vec<_> = dash.top_episodes.iter().map(|e| e.episode_number).collect();
    assert_eq!(top, vec![102, 201, 203, 101, 200]);
}
