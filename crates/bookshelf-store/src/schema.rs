//! Schema definitions and bootstrap utilities.
//!
//! The schema is embedded in the binary and applied on startup when
//! configured to do so. The SQL is idempotent, so re-running it against
//! an initialized database is a no-op.

use sqlx::PgPool;

use crate::error::{StoreError, StoreResult};

/// Embedded SQL for the core schema (001_schema.sql).
pub const SCHEMA_MIGRATION: &str = include_str!("../../../migrations/001_schema.sql");

/// Apply the embedded schema to the database.
///
/// Idempotent: the SQL only creates objects that do not already exist.
pub async fn run_migrations(pool: &PgPool) -> StoreResult<()> {
    tracing::info!("Running database migrations...");

    sqlx::raw_sql(SCHEMA_MIGRATION)
        .execute(pool)
        .await
        .map_err(|e| StoreError::Migration(format!("schema migration failed: {}", e)))?;

    tracing::info!("Migrations completed successfully");
    Ok(())
}

/// Check if the schema has been initialized.
///
/// Returns true if the `authors` table exists.
pub async fn is_schema_initialized(pool: &PgPool) -> StoreResult<bool> {
    let result: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'public'
            AND table_name = 'authors'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_migration_embedded() {
        // Verify the migration SQL is properly embedded
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS authors"));
        assert!(SCHEMA_MIGRATION.contains("CREATE TABLE IF NOT EXISTS books"));
        assert!(SCHEMA_MIGRATION.contains("REFERENCES authors(id)"));
    }
}
