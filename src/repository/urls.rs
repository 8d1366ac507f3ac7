//! Repository for tracked URLs.

use chrono::Utc;
use diesel::prelude::*;

use super::models::{NewUrl, UrlRecord, UrlWithLatestCheckRow};
use super::pool::{run_blocking, SqlitePool};
use super::{parse_datetime, parse_datetime_opt};
use crate::models::{Url, UrlWithLatestCheck};

impl From<UrlRecord> for Url {
    fn from(record: UrlRecord) -> Self {
        Url {
            id: record.id,
            name: record.name,
            created_at: parse_datetime(&record.created_at),
        }
    }
}

/// Diesel-based URL repository with compile-time query checking.
#[derive(Clone)]
pub struct UrlRepository {
    pool: SqlitePool,
}

impl UrlRepository {
    /// Create a new URL repository with an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Atomic find-or-insert keyed on the unique normalized value.
    ///
    /// Uses INSERT OR IGNORE followed by a read-back, so two requests racing
    /// to submit the same value both observe the single surviving row
    /// instead of one of them hitting a duplicate-key failure. Returns the
    /// row and whether this call created it.
    pub async fn create_or_get(&self, name: &str) -> Result<(Url, bool), diesel::result::Error> {
        use crate::schema::urls;

        let name = name.to_string();
        let pool = self.pool.clone();

        run_blocking(pool, move |conn| {
            let created_at = Utc::now().to_rfc3339();
            let inserted = diesel::insert_or_ignore_into(urls::table)
                .values(NewUrl {
                    name: &name,
                    created_at: &created_at,
                })
                .execute(conn)?;

            let record = urls::table
                .filter(urls::name.eq(&name))
                .first::<UrlRecord>(conn)?;

            Ok((Url::from(record), inserted > 0))
        })
        .await
    }

    /// Get a URL by id.
    pub async fn get(&self, id: i32) -> Result<Option<Url>, diesel::result::Error> {
        use crate::schema::urls;

        let pool = self.pool.clone();

        run_blocking(pool, move |conn| {
            urls::table.find(id).first::<UrlRecord>(conn).optional()
        })
        .await
        .map(|opt| opt.map(Url::from))
    }

    /// All tracked URLs, newest first, each paired with its most recent
    /// check (date and status) if one exists.
    pub async fn list_with_latest_check(
        &self,
    ) -> Result<Vec<UrlWithLatestCheck>, diesel::result::Error> {
        let pool = self.pool.clone();

        let rows = run_blocking(pool, move |conn| {
            diesel::sql_query(
                r#"SELECT u.id, u.name, u.created_at,
                          c.created_at AS last_checked_at,
                          c.status_code AS last_status_code
                   FROM urls u
                   LEFT JOIN url_checks c ON c.id = (
                       SELECT id FROM url_checks
                       WHERE url_id = u.id
                       ORDER BY created_at DESC, id DESC
                       LIMIT 1
                   )
                   ORDER BY u.created_at DESC, u.id DESC"#,
            )
            .load::<UrlWithLatestCheckRow>(conn)
        })
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| UrlWithLatestCheck {
                id: row.id,
                name: row.name,
                created_at: parse_datetime(&row.created_at),
                last_checked_at: parse_datetime_opt(row.last_checked_at),
                last_status_code: row.last_status_code.map(|s| s as u16),
            })
            .collect())
    }
}
