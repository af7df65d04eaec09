//! Route definitions for the web interface

use crate::{
    handlers::{api, pages},
    state::AppState,
};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Build the complete web application router
pub fn build_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Page routes
        .route("/", get(pages::submit_page))
        .route("/admin", get(pages::admin_page))
        // API proxy routes
        .route(
            "/api/submissions",
            get(api::api_submissions).post(api::api_create_submission),
        )
        .route("/api/analytics", get(api::api_analytics))
        // Health check
        .route("/health", get(api::health_check))
        // Stylesheet and compiled client bundle
        .route("/static/style.css", get(pages::stylesheet))
        .nest_service("/pkg", ServeDir::new("pkg"))
}
