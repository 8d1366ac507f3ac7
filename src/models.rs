//! Domain models.

use chrono::{DateTime, Utc};

/// A tracked, normalized website address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    pub id: i32,
    /// Normalized value: lowercase scheme + host, explicit port only when
    /// non-default. Unique across all rows.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One point-in-time inspection result for a [`Url`]. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub id: i32,
    pub url_id: i32,
    /// Absent when the fetch never produced an HTTP response.
    pub status_code: Option<u16>,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Metadata extracted from a fetched page. Every field is optional: a
/// malformed, empty, or non-HTML body yields all-absent fields rather than
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
}

/// A [`Url`] paired with its most recent check, if any. Used by the listing
/// page.
#[derive(Debug, Clone)]
pub struct UrlWithLatestCheck {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub last_status_code: Option<u16>,
}
