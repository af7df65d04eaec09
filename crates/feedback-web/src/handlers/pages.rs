//! Page handlers for serving HTML shells
//!
//! Both pages are the same client-rendered application; the shells differ
//! only in title. Routing to the right view happens in the client.

use axum::http::header;
use axum::response::Html;

/// Customer submission form page
pub async fn submit_page() -> Html<&'static str> {
    Html(include_str!("../../templates/submit.html"))
}

/// Admin analytics dashboard page
pub async fn admin_page() -> Html<&'static str> {
    Html(include_str!("../../templates/admin.html"))
}

/// Shared stylesheet
pub async fn stylesheet() -> ([(header::HeaderName, &'static str); 1], &'static str) {
    (
        [(header::CONTENT_TYPE, "text/css")],
        include_str!("../../static/style.css"),
    )
}
