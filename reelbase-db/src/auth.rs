//! Password hashing, account registration, authentication and user administration.

use reelbase_catalog::types::{PublicUser, Role, UserRecord};
use sha2::{Digest, Sha256};

use crate::catalog::{Catalog, Changes};
use crate::error::CatalogError;
use crate::store::KeyValueStore;

/// SHA-256 of the UTF-8 password, as 64 lowercase hex characters.
pub fn hash_password(password: &str) -> String {
    Sha256::digest(password.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

impl<S: KeyValueStore> Catalog<S> {
    /// Create an account and return its public record.
    ///
    /// The username is stored exactly as given; a blank one is rejected.
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<PublicUser, CatalogError> {
        if username.trim().is_empty() {
            return Err(CatalogError::InvalidInput("username must not be empty".to_string()));
        }
        if self.index.users.contains_key(username) {
            return Err(CatalogError::duplicate("User", username));
        }

        let record = UserRecord {
            username: username.to_string(),
            password_hash: hash_password(password),
            role,
        };
        let public = record.public();
        let mut users = self.tables.users.clone();
        users.push(record);
        self.commit(Changes::default().users(users))?;
        log::info!("Registered user '{}' ({})", public.username, public.role);
        Ok(public)
    }

    /// Check credentials. Unknown user and wrong password both yield `None`.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<PublicUser> {
        let matched = self
            .index
            .users
            .get(username)
            .map(|&pos| &self.tables.users[pos])
            .filter(|user| user.password_hash == hash_password(password))
            .map(UserRecord::public);

        if matched.is_none() {
            log::warn!("Failed login attempt for '{}'", username);
        }
        matched
    }

    /// Public records of every account, in registration order.
    pub fn list_users(&self) -> Vec<PublicUser> {
        self.tables.users.iter().map(UserRecord::public).collect()
    }

    pub fn user(&self, username: &str) -> Option<PublicUser> {
        self.index
            .users
            .get(username)
            .map(|&pos| self.tables.users[pos].public())
    }

    pub fn delete_user(&mut self, username: &str) -> Result<(), CatalogError> {
        if !self.index.users.contains_key(username) {
            return Err(CatalogError::not_found("User", username));
        }
        let users = self
            .tables
            .users
            .iter()
            .filter(|u| u.username != username)
            .cloned()
            .collect();
        self.commit(Changes::default().users(users))?;
        log::info!("Deleted user '{}'", username);
        Ok(())
    }

    pub fn set_role(&mut self, username: &str, role: Role) -> Result<(), CatalogError> {
        let pos = *self
            .index
            .users
            .get(username)
            .ok_or_else(|| CatalogError::not_found("User", username))?;
        let mut users = self.tables.users.clone();
        users[pos].role = role;
        self.commit(Changes::default().users(users))?;
        log::info!("Changed role of '{}' to {}", username, role);
        Ok(())
    }
}
