//! The entity store: typed collections loaded from a [`KeyValueStore`], their
//! indexes, and the staged-commit path every mutation goes through.

use reelbase_catalog::types::*;

use crate::error::CatalogError;
use crate::index::Index;
use crate::store::{KeyValueStore, StoreError};
use crate::tables::{Record, encode_table, load_table};

/// All collections, in insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tables {
    pub shows: Vec<Show>,
    pub seasons: Vec<Season>,
    pub episodes: Vec<Episode>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
    pub screen_times: Vec<ScreenTime>,
    pub actor_screen_times: Vec<ActorScreenTime>,
    pub episode_screen_times: Vec<EpisodeScreenTime>,
    pub crew_episodes: Vec<CrewEpisode>,
    pub users: Vec<UserRecord>,
}

impl Tables {
    fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        Ok(Self {
            shows: load_table(store)?,
            seasons: load_table(store)?,
            episodes: load_table(store)?,
            cast: load_table(store)?,
            crew: load_table(store)?,
            screen_times: load_table(store)?,
            actor_screen_times: load_table(store)?,
            episode_screen_times: load_table(store)?,
            crew_episodes: load_table(store)?,
            users: load_table(store)?,
        })
    }
}

/// Replacement collections for one logical operation.
///
/// Nothing is visible until [`Catalog::commit`] has written every staged
/// collection in a single `put_all`.
#[derive(Debug, Default)]
pub(crate) struct Changes {
    shows: Option<Vec<Show>>,
    seasons: Option<Vec<Season>>,
    episodes: Option<Vec<Episode>>,
    cast: Option<Vec<CastMember>>,
    crew: Option<Vec<CrewMember>>,
    screen_times: Option<Vec<ScreenTime>>,
    actor_screen_times: Option<Vec<ActorScreenTime>>,
    episode_screen_times: Option<Vec<EpisodeScreenTime>>,
    crew_episodes: Option<Vec<CrewEpisode>>,
    users: Option<Vec<UserRecord>>,
}

macro_rules! stage {
    ($($method:ident => $field:ident: $ty:ty),* $(,)?) => {
        impl Changes {
            $(pub fn $method(mut self, rows: Vec<$ty>) -> Self {
                self.$field = Some(rows);
                self
            })*

            fn encode(&self) -> Result<Vec<(&'static str, String)>, StoreError> {
                let mut entries = Vec::new();
                $(if let Some(rows) = &self.$field {
                    entries.push(encode_table(rows)?);
                })*
                Ok(entries)
            }

            fn apply(self, tables: &mut Tables) {
                $(if let Some(rows) = self.$field {
                    tables.$field = rows;
                })*
            }
        }
    };
}

stage! {
    shows => shows: Show,
    seasons => seasons: Season,
    episodes => episodes: Episode,
    cast => cast: CastMember,
    crew => crew: CrewMember,
    screen_times => screen_times: ScreenTime,
    actor_screen_times => actor_screen_times: ActorScreenTime,
    episode_screen_times => episode_screen_times: EpisodeScreenTime,
    crew_episodes => crew_episodes: CrewEpisode,
    users => users: UserRecord,
}

/// In-memory view of every collection, backed by a key-value store.
///
/// Reads are served from memory through the index. Writes validate against the
/// current view, then persist and swap in the new collections together.
pub struct Catalog<S: KeyValueStore> {
    store: S,
    pub(crate) tables: Tables,
    pub(crate) index: Index,
    generation: u64,
}

impl<S: KeyValueStore> Catalog<S> {
    /// Load every collection from `store`.
    pub fn open(store: S) -> Result<Self, CatalogError> {
        let tables = Tables::load(&store)?;
        let generation = store.generation()?;
        let index = Index::build(&tables);
        log::debug!(
            "Loaded catalog: {} shows, {} seasons, {} episodes, {} users",
            tables.shows.len(),
            tables.seasons.len(),
            tables.episodes.len(),
            tables.users.len(),
        );
        Ok(Self {
            store,
            tables,
            index,
            generation,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Re-read every collection unconditionally.
    pub fn reload(&mut self) -> Result<(), CatalogError> {
        self.tables = Tables::load(&self.store)?;
        self.index = Index::build(&self.tables);
        self.generation = self.store.generation()?;
        Ok(())
    }

    /// Re-read every collection if another session has written since the last
    /// load. Returns whether a reload happened.
    pub fn refresh(&mut self) -> Result<bool, CatalogError> {
        let current = self.store.generation()?;
        if current == self.generation {
            return Ok(false);
        }
        log::debug!("Storage changed by another session, reloading");
        self.reload()?;
        Ok(true)
    }

    /// Persist staged collections atomically, then make them visible.
    pub(crate) fn commit(&mut self, changes: Changes) -> Result<(), CatalogError> {
        let entries = changes.encode()?;
        if entries.is_empty() {
            return Ok(());
        }
        self.store.put_all(&entries)?;
        log::debug!(
            "Committed {}",
            entries
                .iter()
                .map(|(key, _)| *key)
                .collect::<Vec<_>>()
                .join(", "),
        );
        changes.apply(&mut self.tables);
        self.index = Index::build(&self.tables);
        Ok(())
    }

    /// Whether the collection for `T` has ever been written.
    pub(crate) fn has_table<T: Record>(&self) -> Result<bool, CatalogError> {
        Ok(self.store.get(T::TABLE.key())?.is_some())
    }
}
