//! Account queries against the migrated `account` table.

use crate::domain::Account;
use sqlx::sqlite::SqlitePool;

/// Insert an account. `created_at` is left to the column default.
///
/// # Errors
/// Returns an error if the insert fails, including on a duplicate email.
pub async fn insert_account(pool: &SqlitePool, account: &Account) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO account (id, email, password, is_admin)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&account.id)
    .bind(&account.email)
    .bind(&account.password)
    .bind(account.is_admin)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find_account_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<Account>, sqlx::Error> {
    sqlx::query_as::<_, Account>(
        r#"
        SELECT id, email, password, is_admin, created_at, updated_at
        FROM account
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Promote or demote an account. Returns whether a row was updated.
pub async fn set_admin(pool: &SqlitePool, id: &str, is_admin: bool) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE account SET is_admin = ? WHERE id = ?")
        .bind(is_admin)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
