use reelbase_catalog::types::*;
use reelbase_db::schema::{CURRENT_VERSION, get_schema_version};
use reelbase_db::*;

/// Store whose writes always fail, to check that failed commits change nothing.
struct FailingStore {
    inner: MemoryStore,
}

impl KeyValueStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn put_all(&mut self, _entries: &[(&str, String)]) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk full".to_string()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk full".to_string()))
    }
}

fn seeded_memory() -> MemoryStore {
    let mut catalog = Catalog::open(MemoryStore::new()).unwrap();
    catalog.initialize().unwrap();
    catalog.into_store()
}

// ── Schema ──────────────────────────────────────────────────────────────────

#[test]
fn schema_creates_successfully() {
    let conn = open_memory().unwrap();
    let version = get_schema_version(&conn).unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    reelbase_db::schema::create_schema(&conn).unwrap();
    let version = get_schema_version(&conn).unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn reopening_keeps_schema_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reel.db");
    {
        let mut store = SqliteStore::open(&path).unwrap();
        store.put_all(&[("tvshow", "[]".to_string())]).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(get_schema_version(store.connection()).unwrap(), CURRENT_VERSION);
    let rows: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
    assert_eq!(store.get("tvshow").unwrap().as_deref(), Some("[]"));
}

#[test]
fn newer_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE schema_version (version INTEGER NOT NULL, applied_at TEXT);
             INSERT INTO schema_version (version) VALUES (99);",
        )
        .unwrap();
    }
    assert!(matches!(
        SqliteStore::open(&path),
        Err(StoreError::Schema(_))
    ));
}

// ── Raw store behavior ──────────────────────────────────────────────────────

#[test]
fn sqlite_store_put_get_remove() {
    let mut store = SqliteStore::open_memory().unwrap();
    assert!(store.get("tvshow").unwrap().is_none());

    store
        .put_all(&[("tvshow", "[]".to_string()), ("cast", "[1]".to_string())])
        .unwrap();
    store.put("tvshow", "[2]".to_string()).unwrap();
    assert_eq!(store.get("tvshow").unwrap().as_deref(), Some("[2]"));

    store.remove("cast").unwrap();
    assert!(store.get("cast").unwrap().is_none());

    let keys = store.keys().unwrap();
    assert_eq!(keys.len(), 1);
    assert!(keys[0].1.is_some());
}

#[test]
fn open_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("reelbase.db");
    let store = SqliteStore::open(&path).unwrap();
    drop(store);
    assert!(path.exists());
}

// ── Tolerant loading ────────────────────────────────────────────────────────

#[test]
fn corrupt_collection_loads_as_empty() {
    let mut store = MemoryStore::new();
    store.put("tvshow", "{{ not json".to_string()).unwrap();
    let shows: Vec<Show> = load_table(&store).unwrap();
    assert!(shows.is_empty());

    let catalog = Catalog::open(store).unwrap();
    assert!(catalog.shows().is_empty());
}

#[test]
fn malformed_records_are_dropped() {
    let mut store = MemoryStore::new();
    store
        .put(
            "cast",
            r#"[{"ActorID":1,"ActorsFirstName":"A","ActorsLastName":"B"},{"ActorID":"x"},42]"#.to_string(),
        )
        .unwrap();
    let cast: Vec<CastMember> = load_table(&store).unwrap();
    assert_eq!(cast.len(), 1);
    assert_eq!(cast[0].actor_id, 1);
}

#[test]
fn encode_table_uses_collection_key() {
    let (key, value) = encode_table(&[Show {
        title: "T".to_string(),
        description: "D".to_string(),
    }])
    .unwrap();
    assert_eq!(key, "tvshow");
    assert_eq!(value, r#"[{"Title":"T","Description":"D"}]"#);
}

// ── Initialization ──────────────────────────────────────────────────────────

#[test]
fn initialize_seeds_once() {
    let mut catalog = Catalog::open(MemoryStore::new()).unwrap();
    let first = catalog.initialize().unwrap();
    assert!(first.catalog_seeded && first.users_seeded);
    assert_eq!(catalog.shows().len(), 2);
    assert_eq!(catalog.list_users().len(), 2);

    let second = catalog.initialize().unwrap();
    assert_eq!(second, InitReport::default());
}

#[test]
fn emptied_catalog_is_not_reseeded() {
    let mut catalog = Catalog::open(seeded_memory()).unwrap();
    catalog.delete_show("Urban Legends").unwrap();
    catalog.delete_episode(101).unwrap();
    catalog.delete_episode(102).unwrap();
    catalog.delete_season(1).unwrap();
    catalog.delete_season(2).unwrap();
    catalog.delete_show("Galactic Horizons").unwrap();

    let mut reopened = Catalog::open(catalog.into_store()).unwrap();
    let report = reopened.initialize().unwrap();
    assert!(!report.catalog_seeded);
    assert!(reopened.shows().is_empty());
}

#[test]
fn import_adds_new_and_skips_existing() {
    let mut catalog = Catalog::open(seeded_memory()).unwrap();
    let seed = reelbase_catalog::parse_seed(
        r#"
shows:
  - Title: Galactic Horizons
    Description: duplicate
  - Title: Deep Water
    Description: Submarine drama.
seasons:
  - SeasonID: 3
    SeasonNumber: 1
    SeasonDescription: ""
    DateStarted: "2024-03-01"
    DateEnded: ""
    Title: Deep Water
episodes:
  - EpisodeNumber: 301
    Episodetitle: Dive
    EpisodeDescription: ""
    Rating: 7
    DatePublished: "2024-03-01"
    SeasonID: 3
"#,
    )
    .unwrap();

    let stats = catalog.import_seed(seed).unwrap();
    assert_eq!(stats.shows, 1);
    assert_eq!(stats.seasons, 1);
    assert_eq!(stats.episodes, 1);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.added(), 3);
    assert_eq!(
        catalog.show("Galactic Horizons").unwrap().description,
        "A journey through the cosmos."
    );
    assert_eq!(catalog.episodes_for_season(3).len(), 1);
}

#[test]
fn import_stops_on_dangling_reference() {
    let mut catalog = Catalog::open(seeded_memory()).unwrap();
    let seed = reelbase_catalog::SeedCatalog {
        seasons: vec![Season {
            season_id: 9,
            season_number: 1,
            description: String::new(),
            date_started: String::new(),
            date_ended: String::new(),
            show_title: "Nowhere".to_string(),
        }],
        ..Default::default()
    };
    assert!(matches!(
        catalog.import_seed(seed).unwrap_err(),
        CatalogError::ForeignKeyViolation { .. }
    ));
    assert!(catalog.season(9).is_none());
}

// ── Atomicity ───────────────────────────────────────────────────────────────

#[test]
fn failed_write_leaves_view_unchanged() {
    let mut catalog = Catalog::open(FailingStore {
        inner: seeded_memory(),
    })
    .unwrap();
    let before = catalog.shows().to_vec();

    let err = catalog
        .add_show(Show {
            title: "Lost".to_string(),
            description: String::new(),
        })
        .unwrap_err();
    assert!(matches!(err, CatalogError::Store(StoreError::Unavailable(_))));
    assert_eq!(catalog.shows(), before.as_slice());
    assert!(catalog.show("Lost").is_none());

    let start = reelbase_catalog::parse_timestamp("2023-01-01T10:00").unwrap();
    let end = reelbase_catalog::parse_timestamp("2023-01-01T10:05").unwrap();
    let err = catalog
        .add_screen_time(
            ScreenTime {
                screen_time_id: 1,
                start_time: start,
                end_time: end,
                role_name: "X".to_string(),
                role_type: "Y".to_string(),
            },
            101,
            &[1],
        )
        .unwrap_err();
    assert!(matches!(err, CatalogError::Store(_)));
    assert!(catalog.screen_times().is_empty());
    assert!(catalog.get_detailed_episode(101).unwrap().screen_times.is_empty());
}

#[test]
fn screen_time_commit_is_all_or_nothing_in_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("atomic.db");
    let mut catalog = Catalog::open(SqliteStore::open(&path).unwrap()).unwrap();
    catalog.initialize().unwrap();

    let start = reelbase_catalog::parse_timestamp("2023-01-01T10:00").unwrap();
    let end = reelbase_catalog::parse_timestamp("2023-01-01T10:05").unwrap();
    catalog
        .add_screen_time(
            ScreenTime {
                screen_time_id: 1,
                start_time: start,
                end_time: end,
                role_name: "Captain".to_string(),
                role_type: "Lead".to_string(),
            },
            101,
            &[1, 2],
        )
        .unwrap();
    drop(catalog);

    let reopened = Catalog::open(SqliteStore::open(&path).unwrap()).unwrap();
    let detail = reopened.get_detailed_episode(101).unwrap();
    assert_eq!(detail.screen_times.len(), 1);
    assert_eq!(detail.screen_times[0].actors.len(), 2);
}

// ── Multiple sessions ───────────────────────────────────────────────────────

#[test]
fn refresh_sees_other_session_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db");

    let mut first = Catalog::open(SqliteStore::open(&path).unwrap()).unwrap();
    first.initialize().unwrap();
    let mut second = Catalog::open(SqliteStore::open(&path).unwrap()).unwrap();

    assert!(!second.refresh().unwrap());
    first
        .add_show(Show {
            title: "Breaking Point".to_string(),
            description: String::new(),
        })
        .unwrap();

    assert!(second.show("Breaking Point").is_none());
    assert!(second.refresh().unwrap());
    assert!(second.show("Breaking Point").is_some());
    assert!(!second.refresh().unwrap());
}

#[test]
fn reopen_preserves_catalog_and_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("persist.db");
    {
        let mut catalog = Catalog::open(SqliteStore::open(&path).unwrap()).unwrap();
        catalog.initialize().unwrap();
        let mut session = Session::default();
        session.login(&mut catalog, "admin", "admin").unwrap();
    }

    let catalog = Catalog::open(SqliteStore::open(&path).unwrap()).unwrap();
    assert_eq!(catalog.shows().len(), 2);
    let session = Session::restore(&catalog).unwrap();
    assert_eq!(session.user().unwrap().role, Role::Admin);
}
