//! Append-only repository for check history.

use chrono::Utc;
use diesel::prelude::*;

use super::models::{CheckRecord, NewCheck};
use super::parse_datetime;
use super::pool::{run_blocking, SqlitePool};
use crate::models::{Check, PageSummary};

impl From<CheckRecord> for Check {
    fn from(record: CheckRecord) -> Self {
        Check {
            id: record.id,
            url_id: record.url_id,
            status_code: record.status_code.map(|s| s as u16),
            title: record.title,
            h1: record.h1,
            description: record.description,
            created_at: parse_datetime(&record.created_at),
        }
    }
}

diesel::define_sql_function! {
    fn last_insert_rowid() -> Integer;
}

/// Diesel-based check repository. Rows are only ever inserted; history is
/// never rewritten.
#[derive(Clone)]
pub struct CheckRepository {
    pool: SqlitePool,
}

impl CheckRepository {
    /// Create a new check repository with an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist one check outcome for a URL and return the new row id.
    ///
    /// `status_code` is `None` when the fetch never produced an HTTP
    /// response; the row is still written so the history reflects the
    /// failed attempt.
    pub async fn record(
        &self,
        url_id: i32,
        status_code: Option<u16>,
        summary: PageSummary,
    ) -> Result<i32, diesel::result::Error> {
        use crate::schema::url_checks;

        let pool = self.pool.clone();

        run_blocking(pool, move |conn| {
            let created_at = Utc::now().to_rfc3339();
            diesel::insert_into(url_checks::table)
                .values(NewCheck {
                    url_id,
                    status_code: status_code.map(|s| s as i32),
                    title: summary.title.as_deref(),
                    h1: summary.h1.as_deref(),
                    description: summary.description.as_deref(),
                    created_at: &created_at,
                })
                .execute(conn)?;

            // Same connection, so this is the row just inserted
            diesel::select(last_insert_rowid()).get_result::<i32>(conn)
        })
        .await
    }

    /// All checks for a URL, newest first.
    pub async fn list_for_url(&self, url_id: i32) -> Result<Vec<Check>, diesel::result::Error> {
        use crate::schema::url_checks;

        let pool = self.pool.clone();

        run_blocking(pool, move |conn| {
            url_checks::table
                .filter(url_checks::url_id.eq(url_id))
                .order(url_checks::id.desc())
                .load::<CheckRecord>(conn)
        })
        .await
        .map(|records| records.into_iter().map(Check::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{create_diesel_pool_from_url, initialize_schema, UrlRepository};
    use tempfile::tempdir;

    async fn setup_test_db() -> (SqlitePool, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let pool = create_diesel_pool_from_url(&db_path.display().to_string()).unwrap();
        initialize_schema(pool.clone()).await.unwrap();

        (pool, dir)
    }

    #[tokio::test]
    async fn record_and_list_newest_first() {
        let (pool, _dir) = setup_test_db().await;
        let urls = UrlRepository::new(pool.clone());
        let checks = CheckRepository::new(pool);

        let (url, _) = urls.create_or_get("https://example.com").await.unwrap();

        let first = checks
            .record(
                url.id,
                Some(200),
                PageSummary {
                    title: Some("A".to_string()),
                    h1: Some("B".to_string()),
                    description: Some("C".to_string()),
                },
            )
            .await
            .unwrap();
        let second = checks
            .record(url.id, Some(404), PageSummary::default())
            .await
            .unwrap();
        assert_ne!(first, second);

        let history = checks.list_for_url(url.id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, second);
        assert_eq!(history[0].status_code, Some(404));
        assert_eq!(history[1].status_code, Some(200));
        assert_eq!(history[1].title.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn failed_fetch_records_absent_status() {
        let (pool, _dir) = setup_test_db().await;
        let urls = UrlRepository::new(pool.clone());
        let checks = CheckRepository::new(pool);

        let (url, _) = urls.create_or_get("https://unreachable.example").await.unwrap();
        checks.record(url.id, None, PageSummary::default()).await.unwrap();

        let history = checks.list_for_url(url.id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].status_code, None);
        assert!(history[0].title.is_none());
    }
}
