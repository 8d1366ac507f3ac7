//! Request handlers.
//!
//! Notices that survive a redirect travel as a short `flash` query
//! parameter; validation errors render inline with HTTP 422 and never
//! redirect.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;

use super::templates;
use super::AppState;
use crate::checker::{normalize_url, run_check, CheckResult};
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    pub flash: Option<String>,
}

/// `GET /` — submission form.
pub async fn index() -> Html<String> {
    Html(templates::index_page(None, None))
}

/// `POST /urls` — validate, find-or-insert, redirect to the detail page.
pub async fn create_url(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Result<Response, AppError> {
    let normalized = match normalize_url(&form.url) {
        Ok(normalized) => normalized,
        Err(e) => {
            // Re-display the rejected input inline, nothing persisted
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(templates::index_page(Some(&form.url), Some(&e.to_string()))),
            )
                .into_response());
        }
    };

    let (url, created) = state.urls.create_or_get(&normalized).await?;
    let flash = if created { "added" } else { "exists" };
    Ok(Redirect::to(&format!("/urls/{}?flash={}", url.id, flash)).into_response())
}

/// `GET /urls` — all tracked URLs with their latest check.
pub async fn list_urls(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let urls = state.urls.list_with_latest_check().await?;
    Ok(Html(templates::urls_page(&urls)))
}

/// `GET /urls/:id` — one URL plus its check history, newest first.
pub async fn url_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<DetailParams>,
) -> Result<Html<String>, AppError> {
    let url = state.urls.get(id).await?.ok_or(AppError::NotFound(id))?;
    let checks = state.checks.list_for_url(id).await?;
    Ok(Html(templates::url_page(
        &url,
        &checks,
        params.flash.as_deref(),
    )))
}

/// `POST /urls/:id/checks` — run one check and redirect back with a notice.
pub async fn create_check(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Redirect, AppError> {
    let url = state.urls.get(id).await?.ok_or(AppError::NotFound(id))?;

    let flash = match run_check(&state.fetcher, &state.checks, &url).await? {
        CheckResult::Completed(_) => "checked",
        CheckResult::Unreachable(_) => "check_failed",
    };

    Ok(Redirect::to(&format!("/urls/{}?flash={}", id, flash)))
}
