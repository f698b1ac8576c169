//! Database module for SQLite operations.
//!
//! This module provides:
//! - Connection pool setup and SQLite pragma configuration
//! - Database existence checks and creation
//! - Versioned schema migrations for the `account` table
//! - Account queries against the migrated schema

pub mod accounts;
pub mod admin;
pub mod migrations;
pub mod pool;

pub use admin::{DatabaseAdmin, SqliteAdmin};
pub use migrations::{Migration, MigrationError, Migrator, MIGRATIONS};
pub use pool::connect;
