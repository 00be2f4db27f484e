//! TV catalog data model types, seed data, and YAML seed import.
//!
//! This crate defines the persisted record shapes for shows, seasons, episodes,
//! cast, crew, screentimes, their junction tables and user accounts, without
//! any storage dependencies. `reelbase-db` persists and validates them.

pub mod seed;
pub mod timestamp;
pub mod types;
pub mod yaml;

pub use seed::{SeedCatalog, default_catalog};
pub use timestamp::{TimestampError, format_timestamp, parse_timestamp};
pub use types::*;
pub use yaml::{YamlError, load_seed_file, parse_seed};
