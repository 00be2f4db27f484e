//! Persistence, integrity and query layer for the TV catalog.
//!
//! Collections live in a key-value store (SQLite or in-memory) as serialized
//! record lists. [`Catalog`] loads them, keeps foreign-key indexes, enforces
//! uniqueness and referential integrity on every write, and assembles the
//! denormalized episode view. Accounts and the signed-in [`Session`] are kept in
//! the same store.

pub mod auth;
pub mod catalog;
pub mod error;
mod index;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod seed;
pub mod session;
pub mod store;
pub mod tables;

pub use auth::hash_password;
pub use catalog::Catalog;
pub use error::CatalogError;
pub use queries::Dashboard;
pub use schema::{open_database, open_memory};
pub use seed::{DEFAULT_ACCOUNTS, ImportStats, InitReport};
pub use session::Session;
pub use store::{KeyValueStore, MemoryStore, SqliteStore, StoreError};
pub use tables::{Record, SESSION_KEY, Table, encode_table, load_table};
