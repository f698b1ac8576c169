//! Domain types for the HBnB application.
//!
//! This module provides:
//! - `Account`: a user account row as stored in the `account` table
//! - `Country`: a country referenced by places
//! - `Entity`: the closed set of objects a repository can persist

pub mod account;
pub mod country;
pub mod entity;

pub use account::Account;
pub use country::Country;
pub use entity::{Entity, EntityKind};
