use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};

use crate::templates::error_page;

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    tracing::debug!("No route for {}", uri);
    (
        StatusCode::NOT_FOUND,
        Html(error_page(StatusCode::NOT_FOUND, "The page you requested does not exist").into_string()),
    )
}
