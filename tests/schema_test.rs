use hbnb::db::accounts::{find_account_by_email, insert_account};
use hbnb::db::MIGRATIONS;
use hbnb::{connect, Account, Migrator};
use tempfile::TempDir;

async fn table_names(pool: &sqlx::SqlitePool) -> Vec<String> {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .unwrap();
    rows.into_iter().map(|(name,)| name).collect()
}

#[tokio::test]
async fn test_migration_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}", temp_dir.path().join("schema.db").display());
    let pool = connect(&url).await.expect("connect failed");
    let migrator = Migrator::new(pool.clone());

    let applied = migrator.upgrade().await.unwrap();
    assert_eq!(applied.len(), MIGRATIONS.len());
    assert_eq!(table_names(&pool).await, vec!["account", "schema_version"]);

    let account = Account::new("carol@example.com", "pw").with_admin(true);
    insert_account(&pool, &account).await.unwrap();
    let found = find_account_by_email(&pool, "carol@example.com")
        .await
        .unwrap()
        .unwrap();
    assert!(found.is_admin);

    migrator.downgrade().await.unwrap();
    assert_eq!(table_names(&pool).await, vec!["schema_version"]);

    // Re-applying after a downgrade starts from an empty table.
    migrator.upgrade().await.unwrap();
    assert!(find_account_by_email(&pool, "carol@example.com")
        .await
        .unwrap()
        .is_none());
}
