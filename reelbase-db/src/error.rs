use reelbase_catalog::TimestampError;
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by catalog, auth and session operations.
///
/// Every variant except `Store` leaves stored and in-memory state unchanged.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A record with the same key already exists.
    #[error("{entity} '{key}' already exists")]
    DuplicateKey { entity: &'static str, key: String },

    /// A record references a parent that does not exist.
    #[error("{entity} references unknown {target} '{key}'")]
    ForeignKeyViolation {
        entity: &'static str,
        target: &'static str,
        key: String,
    },

    /// A delete was blocked because dependent rows still reference the record.
    #[error("Cannot delete {entity} '{key}' while it has {dependents}")]
    ConstraintViolation {
        entity: &'static str,
        key: String,
        dependents: &'static str,
    },

    /// Screentime end is not after its start.
    #[error("EndTime must be after StartTime ({start} .. {end})")]
    InvalidRange { start: String, end: String },

    #[error(transparent)]
    InvalidTimestamp(#[from] TimestampError),

    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Permission denied: {0} requires the ADMIN role")]
    PermissionDenied(String),

    #[error("You cannot {0} your own account")]
    SelfModification(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    pub(crate) fn duplicate(entity: &'static str, key: impl ToString) -> Self {
        Self::DuplicateKey {
            entity,
            key: key.to_string(),
        }
    }

    pub(crate) fn foreign_key(entity: &'static str, target: &'static str, key: impl ToString) -> Self {
        Self::ForeignKeyViolation {
            entity,
            target,
            key: key.to_string(),
        }
    }

    pub(crate) fn constraint(entity: &'static str, key: impl ToString, dependents: &'static str) -> Self {
        Self::ConstraintViolation {
            entity,
            key: key.to_string(),
            dependents,
        }
    }

    pub fn not_found(entity: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}
