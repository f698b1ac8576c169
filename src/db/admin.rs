//! Database existence checks and creation.

use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::Sqlite;
use tracing::debug;

/// Checks for and creates the database a URL points at.
#[async_trait]
pub trait DatabaseAdmin: Send + Sync {
    async fn database_exists(&self, database_url: &str) -> Result<bool, sqlx::Error>;

    async fn create_database(&self, database_url: &str) -> Result<(), sqlx::Error>;
}

/// `DatabaseAdmin` for SQLite URLs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteAdmin;

#[async_trait]
impl DatabaseAdmin for SqliteAdmin {
    async fn database_exists(&self, database_url: &str) -> Result<bool, sqlx::Error> {
        let exists = Sqlite::database_exists(database_url).await?;
        debug!(database_url, exists, "Checked database existence");
        Ok(exists)
    }

    async fn create_database(&self, database_url: &str) -> Result<(), sqlx::Error> {
        Sqlite::create_database(database_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_then_exists() {
        let temp_dir = TempDir::new().unwrap();
        let url = format!("sqlite:{}", temp_dir.path().join("admin.db").display());

        let admin = SqliteAdmin;
        assert!(!admin.database_exists(&url).await.unwrap());

        admin.create_database(&url).await.unwrap();
        assert!(admin.database_exists(&url).await.unwrap());
    }
}
