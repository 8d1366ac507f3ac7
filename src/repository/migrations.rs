//! Schema bootstrap.
//!
//! The schema is two tables; creation is idempotent and runs at startup
//! instead of carrying a migration framework.

use diesel::prelude::*;

use super::pool::{init_connection_pragmas, run_blocking, SqlitePool};

/// Create the tables if they do not exist and set connection pragmas.
pub async fn initialize_schema(pool: SqlitePool) -> Result<(), diesel::result::Error> {
    run_blocking(pool, |conn| {
        init_connection_pragmas(conn)?;

        diesel::sql_query(
            r#"CREATE TABLE IF NOT EXISTS urls (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
            )"#,
        )
        .execute(conn)?;

        diesel::sql_query(
            r#"CREATE TABLE IF NOT EXISTS url_checks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url_id INTEGER NOT NULL REFERENCES urls(id),
                status_code INTEGER,
                title TEXT,
                h1 TEXT,
                description TEXT,
                created_at TEXT NOT NULL
            )"#,
        )
        .execute(conn)?;

        diesel::sql_query(
            "CREATE INDEX IF NOT EXISTS idx_url_checks_url_id ON url_checks(url_id, created_at)",
        )
        .execute(conn)?;

        Ok(())
    })
    .await
}
