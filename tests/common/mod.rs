//! Request helpers shared by the handler integration tests
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use tower::util::ServiceExt;

use showbook::handlers;
use showbook::state::AppState;

pub fn create_test_router(state: &AppState) -> Router {
    handlers::router(state.clone())
}

/// Encodes pairs as an `application/x-www-form-urlencoded` body
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

pub async fn get(state: &AppState, uri: &str) -> Response {
    create_test_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_form(state: &AppState, uri: &str, pairs: &[(&str, &str)]) -> Response {
    create_test_router(state)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form_body(pairs)))
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn delete(state: &AppState, uri: &str) -> Response {
    create_test_router(state)
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn parse_json_response<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
