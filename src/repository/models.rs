//! Diesel ORM models for database tables.
//!
//! These models provide compile-time type checking for database operations.
//! Timestamps are stored as RFC 3339 TEXT and converted back to chrono types
//! in the repository layer.

use diesel::prelude::*;

use crate::schema;

/// URL record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::urls)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UrlRecord {
    pub id: i32,
    pub name: String,
    pub created_at: String,
}

/// New URL for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::urls)]
pub struct NewUrl<'a> {
    pub name: &'a str,
    pub created_at: &'a str,
}

/// Check record from the database.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::url_checks)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CheckRecord {
    pub id: i32,
    pub url_id: i32,
    pub status_code: Option<i32>,
    pub title: Option<String>,
    pub h1: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

/// New check for insertion.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::url_checks)]
pub struct NewCheck<'a> {
    pub url_id: i32,
    pub status_code: Option<i32>,
    pub title: Option<&'a str>,
    pub h1: Option<&'a str>,
    pub description: Option<&'a str>,
    pub created_at: &'a str,
}

/// Row shape for the listing query that joins each URL with its most recent
/// check.
#[derive(QueryableByName, Debug, Clone)]
pub struct UrlWithLatestCheckRow {
    #[diesel(sql_type = diesel::sql_types::Integer)]
    pub id: i32,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub name: String,
    #[diesel(sql_type = diesel::sql_types::Text)]
    pub created_at: String,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Text>)]
    pub last_checked_at: Option<String>,
    #[diesel(sql_type = diesel::sql_types::Nullable<diesel::sql_types::Integer>)]
    pub last_status_code: Option<i32>,
}
