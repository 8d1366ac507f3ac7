//! Database access for tracked URLs and their check history.
//!
//! SQLite via sync Diesel with r2d2 pooling, wrapped in spawn_blocking for
//! use from async request handlers.

mod checks;
mod migrations;
mod models;
mod pool;
mod urls;

pub use checks::CheckRepository;
pub use migrations::initialize_schema;
pub use pool::{create_diesel_pool, create_diesel_pool_from_url, run_blocking, SqlitePool};
pub use urls::UrlRepository;

use chrono::{DateTime, Utc};

/// Parse an RFC 3339 timestamp stored as TEXT. Unparseable values fall back
/// to the epoch rather than failing a whole listing.
pub(crate) fn parse_datetime(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default()
}

pub(crate) fn parse_datetime_opt(raw: Option<String>) -> Option<DateTime<Utc>> {
    raw.as_deref().map(parse_datetime)
}
