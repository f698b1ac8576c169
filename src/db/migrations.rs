//! Versioned schema migrations.
//!
//! Each [`Migration`] is a declarative up/down pair of SQL statements. The
//! [`Migrator`] records applied revisions in the `schema_version` table and
//! applies or reverts them one transaction at a time.

use sqlx::sqlite::SqlitePool;
use sqlx::Row;
use std::collections::HashSet;
use thiserror::Error;
use tracing::info;

/// A reversible schema change.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub revision: &'static str,
    /// Revision this one builds on; `None` for the first migration.
    pub down_revision: Option<&'static str>,
    pub description: &'static str,
    pub up: &'static [&'static str],
    pub down: &'static [&'static str],
}

/// Creates the `account` table.
///
/// `updated_at` is stamped by a trigger on every update; dropping the table
/// drops the trigger with it.
pub const CREATE_ACCOUNT: Migration = Migration {
    revision: "18c39446000d",
    down_revision: None,
    description: "create account table",
    up: &[
        r#"
        CREATE TABLE account (
            id VARCHAR(36) NOT NULL PRIMARY KEY,
            email VARCHAR(120) NOT NULL UNIQUE,
            password VARCHAR(128) NOT NULL,
            is_admin BOOLEAN DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME
        )
        "#,
        r#"
        CREATE TRIGGER account_touch_updated_at
        AFTER UPDATE ON account
        FOR EACH ROW WHEN NEW.updated_at IS OLD.updated_at
        BEGIN
            UPDATE account SET updated_at = CURRENT_TIMESTAMP WHERE id = NEW.id;
        END
        "#,
    ],
    down: &["DROP TABLE account"],
};

/// All migrations, oldest first.
pub const MIGRATIONS: &[Migration] = &[CREATE_ACCOUNT];

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Database is at unknown revision {0}")]
    UnknownRevision(String),
    #[error("Revision {revision} requires {down_revision}, which is not applied")]
    MissingDependency {
        revision: String,
        down_revision: String,
    },
}

/// Applies and reverts [`MIGRATIONS`] against a pool.
pub struct Migrator {
    pool: SqlitePool,
    migrations: &'static [Migration],
}

impl Migrator {
    pub fn new(pool: SqlitePool) -> Self {
        Self::with_migrations(pool, MIGRATIONS)
    }

    pub fn with_migrations(pool: SqlitePool, migrations: &'static [Migration]) -> Self {
        Migrator { pool, migrations }
    }

    /// Apply every pending migration in order.
    ///
    /// Returns the revisions applied by this call; empty when already at head.
    pub async fn upgrade(&self) -> Result<Vec<&'static str>, MigrationError> {
        let mut applied = self.applied_revisions().await?;
        let mut newly_applied = Vec::new();

        for migration in self.migrations {
            if applied.contains(migration.revision) {
                continue;
            }
            if let Some(down_revision) = migration.down_revision {
                if !applied.contains(down_revision) {
                    return Err(MigrationError::MissingDependency {
                        revision: migration.revision.to_string(),
                        down_revision: down_revision.to_string(),
                    });
                }
            }

            info!(
                "Running upgrade {} -> {}, {}",
                migration.down_revision.unwrap_or("<base>"),
                migration.revision,
                migration.description
            );

            let mut tx = self.pool.begin().await?;
            for statement in migration.up {
                sqlx::query(statement).execute(&mut *tx).await?;
            }
            sqlx::query("INSERT INTO schema_version (version_num) VALUES (?)")
                .bind(migration.revision)
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            applied.insert(migration.revision.to_string());
            newly_applied.push(migration.revision);
        }

        if newly_applied.is_empty() {
            info!("Database already at head");
        }
        Ok(newly_applied)
    }

    /// Revert the most recently applied migration.
    ///
    /// Returns the reverted revision, or `None` when nothing is applied.
    pub async fn downgrade(&self) -> Result<Option<&'static str>, MigrationError> {
        let Some(migration) = self.head().await? else {
            info!("No migrations to downgrade");
            return Ok(None);
        };

        info!(
            "Running downgrade {} -> {}, {}",
            migration.revision,
            migration.down_revision.unwrap_or("<base>"),
            migration.description
        );

        let mut tx = self.pool.begin().await?;
        for statement in migration.down {
            sqlx::query(statement).execute(&mut *tx).await?;
        }
        sqlx::query("DELETE FROM schema_version WHERE version_num = ?")
            .bind(migration.revision)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(Some(migration.revision))
    }

    /// The newest applied revision, if any.
    pub async fn current(&self) -> Result<Option<&'static str>, MigrationError> {
        Ok(self.head().await?.map(|m| m.revision))
    }

    async fn head(&self) -> Result<Option<&'static Migration>, MigrationError> {
        let applied = self.applied_revisions().await?;
        Ok(self
            .migrations
            .iter()
            .rev()
            .find(|m| applied.contains(m.revision)))
    }

    async fn applied_revisions(&self) -> Result<HashSet<String>, MigrationError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS schema_version (
                version_num VARCHAR(32) NOT NULL PRIMARY KEY,
                applied_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        let rows = sqlx::query("SELECT version_num FROM schema_version")
            .fetch_all(&self.pool)
            .await?;

        let mut applied = HashSet::with_capacity(rows.len());
        for row in rows {
            let revision: String = row.get("version_num");
            if !self.migrations.iter().any(|m| m.revision == revision) {
                return Err(MigrationError::UnknownRevision(revision));
            }
            applied.insert(revision);
        }
        Ok(applied)
    }
}
