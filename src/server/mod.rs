//! Web server for submitting URLs and browsing check history.
//!
//! Handlers receive everything they need through [`AppState`]; there is no
//! ambient global application state.

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::checker::SiteFetcher;
use crate::config::Settings;
use crate::error::AppError;
use crate::repository::{create_diesel_pool, initialize_schema, CheckRepository, UrlRepository};

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub urls: UrlRepository,
    pub checks: CheckRepository,
    pub fetcher: SiteFetcher,
}

impl AppState {
    pub async fn new(settings: &Settings) -> anyhow::Result<Self> {
        settings.ensure_directories()?;
        let pool = create_diesel_pool(&settings.database_path())?;
        initialize_schema(pool.clone()).await?;

        Ok(Self {
            urls: UrlRepository::new(pool.clone()),
            checks: CheckRepository::new(pool),
            fetcher: SiteFetcher::new(
                &settings.user_agent,
                Duration::from_secs(settings.request_timeout),
            ),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(_) => {
                (StatusCode::NOT_FOUND, Html(templates::not_found())).into_response()
            }
            AppError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(templates::index_page(None, Some(&e.to_string()))),
            )
                .into_response(),
            AppError::Fetch(e) => {
                tracing::error!("unhandled fetch error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(templates::server_error()),
                )
                    .into_response()
            }
            AppError::Database(e) => {
                tracing::error!("database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(templates::server_error()),
                )
                    .into_response()
            }
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let state = AppState::new(settings).await?;
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
