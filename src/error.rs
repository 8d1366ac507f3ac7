//! Error taxonomy for pagecheck.
//!
//! Every error here is handled within the scope of a single request; none is
//! fatal to the process.

use thiserror::Error;

/// Why a submitted URL string was rejected. Nothing is persisted when
/// validation fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("URL is empty")]
    Empty,
    /// Database column limit on `urls.name`.
    #[error("URL exceeds {max} characters")]
    TooLong { max: usize },
    #[error("not a valid URL")]
    Malformed,
    #[error("URL scheme must be http or https")]
    UnsupportedScheme,
}

/// The network request could not be completed at all (DNS failure,
/// connection refused, timeout, TLS error). An HTTP error status is *not* a
/// fetch error; 4xx/5xx responses are delivered to the caller as responses.
#[derive(Debug, Error)]
#[error("could not fetch {url}: {source}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub source: reqwest::Error,
}

/// Top-level error for request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no such URL: {0}")]
    NotFound(i32),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}
