//! Typed collections: each record type is bound to the key it is stored under.

use reelbase_catalog::types::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::{KeyValueStore, StoreError};

/// Key holding the signed-in user's public record.
pub const SESSION_KEY: &str = "authUser";

/// Every persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Shows,
    Seasons,
    Episodes,
    Cast,
    Crew,
    ScreenTimes,
    ActorScreenTimes,
    EpisodeScreenTimes,
    CrewEpisodes,
    Users,
}

impl Table {
    pub const ALL: [Table; 10] = [
        Table::Shows,
        Table::Seasons,
        Table::Episodes,
        Table::Cast,
        Table::Crew,
        Table::ScreenTimes,
        Table::ActorScreenTimes,
        Table::EpisodeScreenTimes,
        Table::CrewEpisodes,
        Table::Users,
    ];

    /// Storage key for this collection.
    pub fn key(self) -> &'static str {
        match self {
            Self::Shows => "tvshow",
            Self::Seasons => "tvshowseasons",
            Self::Episodes => "episode",
            Self::Cast => "cast",
            Self::Crew => "crew",
            Self::ScreenTimes => "screentime",
            Self::ActorScreenTimes => "actor_screentime",
            Self::EpisodeScreenTimes => "episode_screentime",
            Self::CrewEpisodes => "crew_episode",
            Self::Users => "users",
        }
    }
}

/// A record type with a fixed home collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    const TABLE: Table;
}

macro_rules! record {
    ($($ty:ty => $table:ident),* $(,)?) => {
        $(impl Record for $ty {
            const TABLE: Table = Table::$table;
        })*
    };
}

record! {
    Show => Shows,
    Season => Seasons,
    Episode => Episodes,
    CastMember => Cast,
    CrewMember => Crew,
    ScreenTime => ScreenTimes,
    ActorScreenTime => ActorScreenTimes,
    EpisodeScreenTime => EpisodeScreenTimes,
    CrewEpisode => CrewEpisodes,
    UserRecord => Users,
}

/// Load a collection, treating absent or corrupt data as empty.
///
/// Only storage failures are errors. A value that is not a JSON list yields an
/// empty collection; list entries that do not fit the record type are dropped.
pub fn load_table<T, S>(store: &S) -> Result<Vec<T>, StoreError>
where
    T: Record,
    S: KeyValueStore + ?Sized,
{
    let key = T::TABLE.key();
    Ok(match store.get(key)? {
        Some(raw) => decode_rows(key, &raw),
        None => Vec::new(),
    })
}

/// Serialize a collection into a `(key, value)` pair ready for `put_all`.
pub fn encode_table<T: Record>(rows: &[T]) -> Result<(&'static str, String), StoreError> {
    let key = T::TABLE.key();
    let value = serde_json::to_string(rows).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    Ok((key, value))
}

fn decode_rows<T: DeserializeOwned>(key: &str, raw: &str) -> Vec<T> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            log::warn!("Stored data for '{}' is corrupt, treating as empty: {}", key, e);
            return Vec::new();
        }
    };

    let total = values.len();
    let rows: Vec<T> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("Dropping malformed '{}' record: {}", key, e);
                None
            }
        })
        .collect();

    if rows.len() != total {
        log::warn!(
            "Dropped {} malformed record(s) from '{}'",
            total - rows.len(),
            key,
        );
    }
    rows
}
