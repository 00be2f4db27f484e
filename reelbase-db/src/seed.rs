//! First-run seeding and bulk import of seed catalogs.

use reelbase_catalog::seed::{SeedCatalog, default_catalog};
use reelbase_catalog::types::{Role, Show, UserRecord};

use crate::auth::hash_password;
use crate::catalog::{Catalog, Changes};
use crate::error::CatalogError;
use crate::store::KeyValueStore;

/// Default accounts created when no users exist: `(username, password, role)`.
pub const DEFAULT_ACCOUNTS: &[(&str, &str, Role)] = &[
    ("admin", "admin", Role::Admin),
    ("user", "user", Role::User),
];

/// What [`Catalog::initialize`] wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InitReport {
    pub catalog_seeded: bool,
    pub users_seeded: bool,
}

/// Counts from [`Catalog::import_seed`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub shows: usize,
    pub seasons: usize,
    pub episodes: usize,
    pub cast: usize,
    pub crew: usize,
    /// Records whose key already existed.
    pub skipped: usize,
}

impl ImportStats {
    pub fn added(&self) -> usize {
        self.shows + self.seasons + self.episodes + self.cast + self.crew
    }
}

impl<S: KeyValueStore> Catalog<S> {
    /// Write the built-in catalog if the show collection has never been stored,
    /// and the default accounts if there are no users.
    pub fn initialize(&mut self) -> Result<InitReport, CatalogError> {
        let mut report = InitReport::default();
        let mut changes = Changes::default();

        if !self.has_table::<Show>()? {
            let seed = default_catalog();
            changes = changes
                .shows(seed.shows)
                .seasons(seed.seasons)
                .episodes(seed.episodes)
                .cast(seed.cast)
                .crew(seed.crew)
                .screen_times(Vec::new())
                .actor_screen_times(Vec::new())
                .episode_screen_times(Vec::new())
                .crew_episodes(Vec::new());
            report.catalog_seeded = true;
        }

        if self.tables.users.is_empty() {
            let users = DEFAULT_ACCOUNTS
                .iter()
                .map(|&(username, password, role)| UserRecord {
                    username: username.to_string(),
                    password_hash: hash_password(password),
                    role,
                })
                .collect();
            changes = changes.users(users);
            report.users_seeded = true;
        }

        self.commit(changes)?;
        if report.catalog_seeded {
            log::info!("Seeded the catalog with sample data");
        }
        if report.users_seeded {
            log::info!("Created default accounts (admin, user)");
        }
        Ok(report)
    }

    /// Add every record of `seed` through the guarded add operations.
    ///
    /// Records whose key already exists are skipped. Any other violation stops
    /// the import; records added before it stay.
    pub fn import_seed(&mut self, seed: SeedCatalog) -> Result<ImportStats, CatalogError> {
        let mut stats = ImportStats::default();

        for show in seed.shows {
            tally(self.add_show(show), &mut stats.shows, &mut stats.skipped)?;
        }
        for season in seed.seasons {
            tally(self.add_season(season), &mut stats.seasons, &mut stats.skipped)?;
        }
        for episode in seed.episodes {
            tally(self.add_episode(episode), &mut stats.episodes, &mut stats.skipped)?;
        }
        for actor in seed.cast {
            tally(self.add_cast(actor), &mut stats.cast, &mut stats.skipped)?;
        }
        for member in seed.crew {
            tally(self.add_crew(member), &mut stats.crew, &mut stats.skipped)?;
        }

        Ok(stats)
    }
}

fn tally(
    result: Result<(), CatalogError>,
    added: &mut usize,
    skipped: &mut usize,
) -> Result<(), CatalogError> {
    match result {
        Ok(()) => *added += 1,
        Err(CatalogError::DuplicateKey { entity, key }) => {
            log::debug!("Skipping existing {} '{}'", entity, key);
            *skipped += 1;
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
