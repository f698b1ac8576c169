//! User account.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user account.
///
/// Timestamps are assigned by the database; a freshly constructed account has
/// neither until it is read back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    pub id: String,
    pub email: String,
    /// Stored as given.
    #[serde(skip_serializing)]
    pub password: String,
    pub is_admin: bool,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Account {
    /// Create a non-admin account with a fresh v4 id.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.into(),
            password: password.into(),
            is_admin: false,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = is_admin;
        self
    }
}
