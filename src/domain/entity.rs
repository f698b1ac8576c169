//! Persistable entities.

use super::{Account, Country};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of entity, used to address a collection in a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Account,
    Country,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Account => write!(f, "account"),
            EntityKind::Country => write!(f, "country"),
        }
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "account" => Ok(EntityKind::Account),
            "country" => Ok(EntityKind::Country),
            other => Err(format!("unknown entity kind: {}", other)),
        }
    }
}

/// Any object a repository can store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Account(Account),
    Country(Country),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Account(_) => EntityKind::Account,
            Entity::Country(_) => EntityKind::Country,
        }
    }

    /// Identity within its kind: the account id, or the country code.
    pub fn key(&self) -> &str {
        match self {
            Entity::Account(a) => &a.id,
            Entity::Country(c) => &c.code,
        }
    }

    pub fn as_country(&self) -> Option<&Country> {
        match self {
            Entity::Country(c) => Some(c),
            _ => None,
        }
    }
}

impl From<Account> for Entity {
    fn from(account: Account) -> Self {
        Entity::Account(account)
    }
}

impl From<Country> for Entity {
    fn from(country: Country) -> Self {
        Entity::Country(country)
    }
}
