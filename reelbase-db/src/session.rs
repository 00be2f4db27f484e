//! Explicit session context: who is signed in, persisted under [`SESSION_KEY`].
//!
//! The session moves between `Unauthenticated` and `Authenticated(user)`.
//! Role checks for callers live here; the integrity layer itself is role-agnostic.

use reelbase_catalog::types::{PublicUser, Role};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::store::{KeyValueStore, StoreError};
use crate::tables::SESSION_KEY;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated(PublicUser),
}

impl Session {
    /// Read the persisted session record.
    ///
    /// A missing or unreadable record means no one is signed in. A record for
    /// an account that no longer exists is discarded; otherwise the role is
    /// taken from the current account, not from the stale session copy.
    pub fn restore<S: KeyValueStore>(catalog: &Catalog<S>) -> Result<Self, StoreError> {
        let Some(raw) = catalog.store().get(SESSION_KEY)? else {
            return Ok(Self::Unauthenticated);
        };
        let stored: PublicUser = match serde_json::from_str(&raw) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("Stored session is corrupt, ignoring it: {}", e);
                return Ok(Self::Unauthenticated);
            }
        };
        match catalog.user(&stored.username) {
            Some(current) => Ok(Self::Authenticated(current)),
            None => {
                log::info!("Session user '{}' no longer exists", stored.username);
                Ok(Self::Unauthenticated)
            }
        }
    }

    pub fn user(&self) -> Option<&PublicUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn login<S: KeyValueStore>(
        &mut self,
        catalog: &mut Catalog<S>,
        username: &str,
        password: &str,
    ) -> Result<&PublicUser, CatalogError> {
        let user = catalog
            .authenticate(username, password)
            .ok_or(CatalogError::InvalidCredentials)?;
        self.begin(catalog, user)
    }

    /// Create an account and sign in as it.
    pub fn register<S: KeyValueStore>(
        &mut self,
        catalog: &mut Catalog<S>,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<&PublicUser, CatalogError> {
        let user = catalog.register(username, password, role)?;
        self.begin(catalog, user)
    }

    pub fn logout<S: KeyValueStore>(&mut self, catalog: &mut Catalog<S>) -> Result<(), CatalogError> {
        catalog.store_mut().remove(SESSION_KEY)?;
        *self = Self::Unauthenticated;
        Ok(())
    }

    fn begin<S: KeyValueStore>(
        &mut self,
        catalog: &mut Catalog<S>,
        user: PublicUser,
    ) -> Result<&PublicUser, CatalogError> {
        let raw = serde_json::to_string(&user).map_err(|source| StoreError::Encode {
            key: SESSION_KEY.to_string(),
            source,
        })?;
        catalog.store_mut().put(SESSION_KEY, raw)?;
        *self = Self::Authenticated(user);
        self.require_user()
    }

    /// Any signed-in user. Guards reads.
    pub fn require_user(&self) -> Result<&PublicUser, CatalogError> {
        self.user().ok_or(CatalogError::NotAuthenticated)
    }

    /// A signed-in ADMIN. Guards writes and user administration.
    pub fn require_admin(&self, action: &str) -> Result<&PublicUser, CatalogError> {
        let user = self.require_user()?;
        if user.is_admin() {
            Ok(user)
        } else {
            Err(CatalogError::PermissionDenied(action.to_string()))
        }
    }

    /// Refuse `action` when `username` is the signed-in account.
    pub fn ensure_not_self(&self, username: &str, action: &str) -> Result<(), CatalogError> {
        match self.user() {
            Some(user) if user.username == username => {
                Err(CatalogError::SelfModification(action.to_string()))
            }
            _ => Ok(()),
        }
    }
}
