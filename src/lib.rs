pub mod api;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repository;
pub mod seed;

pub use bootstrap::{initialize_database, InitOutcome};
pub use config::{Config, Environment};
pub use db::{connect, Migrator, SqliteAdmin};
pub use domain::{Account, Country, Entity, EntityKind};
pub use error::AppError;
pub use repository::{MemoryRepository, Repository, RepositoryError};
pub use seed::populate_db;
