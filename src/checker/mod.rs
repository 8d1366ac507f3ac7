//! The check pipeline: normalize, fetch, inspect, record.

mod fetch;
mod inspect;
mod normalize;

pub use fetch::{FetchOutcome, SiteFetcher};
pub use inspect::inspect_html;
pub use normalize::normalize_url;

use crate::error::AppError;
use crate::models::{Check, PageSummary, Url};
use crate::repository::CheckRepository;

/// What a single check attempt produced, after it has been persisted.
#[derive(Debug)]
pub enum CheckResult {
    /// The target answered with an HTTP response (any status, 4xx/5xx
    /// included).
    Completed(Check),
    /// The network request never completed; a check row with absent status
    /// was still recorded.
    Unreachable(Check),
}

/// Run one best-effort check for a URL and append the outcome to its
/// history. No retries; the user re-triggers the check manually.
pub async fn run_check(
    fetcher: &SiteFetcher,
    checks: &CheckRepository,
    url: &Url,
) -> Result<CheckResult, AppError> {
    match fetcher.get(&url.name).await {
        Ok(FetchOutcome { status_code, body }) => {
            // Error pages often still carry usable markup
            let summary = inspect_html(&body);
            let id = checks.record(url.id, Some(status_code), summary.clone()).await?;
            tracing::info!(url = %url.name, status = status_code, "check completed");
            Ok(CheckResult::Completed(persisted(id, url.id, Some(status_code), summary)))
        }
        Err(e) => {
            tracing::warn!(url = %url.name, error = %e, "check could not connect");
            let id = checks.record(url.id, None, PageSummary::default()).await?;
            Ok(CheckResult::Unreachable(persisted(
                id,
                url.id,
                None,
                PageSummary::default(),
            )))
        }
    }
}

fn persisted(id: i32, url_id: i32, status_code: Option<u16>, summary: PageSummary) -> Check {
    Check {
        id,
        url_id,
        status_code,
        title: summary.title,
        h1: summary.h1,
        description: summary.description,
        created_at: chrono::Utc::now(),
    }
}
