//! Route table.

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/urls", get(handlers::list_urls).post(handlers::create_url))
        .route("/urls/:id", get(handlers::url_detail))
        .route("/urls/:id/checks", post(handlers::create_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
