//! Boxer registry persistence layer.
//!
//! SQLite-backed storage for boxer profiles and match statistics, exposed
//! as plain functions for request handlers to call:
//! - [`db`] - schema initialization and the shared connection pool
//! - [`repo`] - CRUD operations, stats updates, and the leaderboard query
//! - [`config`] - TOML configuration for embedding applications
//! - [`logging`] - process-wide tracing setup

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod repo;

pub use config::RegistryConfig;
pub use db::{init_db, DbPool};
pub use error::RegistryError;
pub use repo::BoxerRepo;
