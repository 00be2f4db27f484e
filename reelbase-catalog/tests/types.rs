use reelbase_catalog::*;

#[test]
fn season_uses_stored_field_names() {
    let season = Season {
        season_id: 1,
        season_number: 1,
        description: "The Beginning".to_string(),
        date_started: "2023-01-01".to_string(),
        date_ended: "2023-03-01".to_string(),
        show_title: "Galactic Horizons".to_string(),
    };
    let json = serde_json::to_value(&season).unwrap();
    assert_eq!(json["SeasonID"], 1);
    assert_eq!(json["SeasonDescription"], "The Beginning");
    assert_eq!(json["Title"], "Galactic Horizons");
}

#[test]
fn user_record_reads_camel_case_and_defaults_role() {
    let user: UserRecord =
        serde_json::from_str(r#"{"username":"ann","passwordHash":"abc"}"#).unwrap();
    assert_eq!(user.password_hash, "abc");
    assert_eq!(user.role, Role::User);

    let admin: UserRecord =
        serde_json::from_str(r#"{"username":"root","passwordHash":"x","role":"ADMIN"}"#).unwrap();
    assert!(admin.public().is_admin());
}

#[test]
fn role_parses_case_insensitively() {
    assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!("USER".parse::<Role>().unwrap(), Role::User);
    assert!("owner".parse::<Role>().is_err());
    assert_eq!(Role::Admin.toggled(), Role::User);
}

#[test]
fn screen_time_accepts_minute_precision_input() {
    let st: ScreenTime = serde_json::from_str(
        r#"{"ScreenTimeID":7,"StartTime":"2024-01-05T20:15","EndTime":"2024-01-05T20:30","RoleName":"Captain","RoleType":"Lead"}"#,
    )
    .unwrap();
    assert!(st.end_time > st.start_time);
    let json = serde_json::to_value(&st).unwrap();
    assert_eq!(json["StartTime"], "2024-01-05T20:15:00");
}

#[test]
fn screen_time_rejects_bad_timestamp() {
    let result: Result<ScreenTime, _> = serde_json::from_str(
        r#"{"ScreenTimeID":7,"StartTime":"soon","EndTime":"2024-01-05T20:30"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn detailed_episode_flattens_episode_fields() {
    let seed = default_catalog();
    let detail = DetailedEpisode {
        episode: seed.episodes[0].clone(),
        screen_times: vec![ScreenTimeDetail {
            screen_time: ScreenTime {
                screen_time_id: 1,
                start_time: parse_timestamp("2023-01-01T10:00").unwrap(),
                end_time: parse_timestamp("2023-01-01T10:05").unwrap(),
                role_name: "Captain".to_string(),
                role_type: "Lead".to_string(),
            },
            actors: vec![seed.cast[0].clone()],
        }],
        crew: seed.crew.clone(),
    };

    let json = serde_json::to_value(&detail).unwrap();
    assert_eq!(json["EpisodeNumber"], 101);
    assert_eq!(json["Episodetitle"], "Pilot");
    assert_eq!(json["screenTimes"][0]["ScreenTimeID"], 1);
    assert_eq!(json["screenTimes"][0]["actors"][0]["ActorsFirstName"], "John");
    assert_eq!(json["crew"][0]["PersonDefination"], "Director");

    let back: DetailedEpisode = serde_json::from_value(json).unwrap();
    assert_eq!(back, detail);
}

#[test]
fn default_catalog_matches_first_run_data() {
    let seed = default_catalog();
    assert_eq!(seed.shows.len(), 2);
    assert_eq!(seed.seasons.len(), 2);
    assert!(seed.seasons.iter().all(|s| s.show_title == "Galactic Horizons"));
    let titles: Vec<_> = seed.episodes.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Pilot", "First Contact"]);
    assert_eq!(seed.cast.len(), 2);
    assert_eq!(seed.crew.len(), 1);
}
