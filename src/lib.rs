//! pagecheck: track website URLs and record point-in-time metadata checks.
//!
//! A submitted URL is normalized to scheme+host, stored once, and can then be
//! checked on demand: each check fetches the page, extracts the title, first
//! h1 and meta description, and appends an immutable row to the check history.

pub mod checker;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod server;
