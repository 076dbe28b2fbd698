//! Integration tests for the JSON API, health check and fallback

mod common;

use axum::http::StatusCode;
use fake::{faker::company::en::CompanyName, faker::name::en::Name, Fake};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::*;
use showbook::test_utils::*;

#[tokio::test]
async fn test_health_check() {
    let state = setup_test_app_state().await;

    let response = get(&state, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = parse_json_response(response).await;
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_unknown_route_renders_not_found_page() {
    let state = setup_test_app_state().await;

    let response = get(&state, "/no/such/page").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_text(response).await;
    assert!(body.contains("404"));
}

#[tokio::test]
async fn test_api_not_found_is_json() {
    let state = setup_test_app_state().await;

    let response = get(&state, "/api/venues/99999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = parse_json_response(response).await;
    assert_eq!(body["error"], "Venue 99999 not found");
    assert_eq!(body["details"], "Not found: Venue 99999 not found");

    let response = get(&state, "/api/artists/99999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_lists_are_empty_without_data() {
    let state = setup_test_app_state().await;

    for uri in ["/api/venues", "/api/artists", "/api/shows"] {
        let response = get(&state, uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = parse_json_response(response).await;
        assert_eq!(body, json!([]), "{} should be empty", uri);
    }
}

#[tokio::test]
async fn test_api_show_rows_carry_both_parties() {
    let state = setup_test_app_state().await;
    let artist_name: String = Name().fake();
    let venue_name: String = CompanyName().fake();
    let artist = create_test_artist(&state.db, &artist_name).await;
    let venue = create_test_venue(&state.db, &venue_name).await;
    let show = create_test_show(&state.db, artist.id, venue.id, days_from_now(7)).await;

    let shows: Value = parse_json_response(get(&state, "/api/shows").await).await;

    assert_eq!(
        shows,
        json!([{
            "venue_id": venue.id,
            "venue_name": venue_name,
            "artist_id": artist.id,
            "artist_name": artist_name,
            "artist_image_link": null,
            "start_time": show.start_time,
        }])
    );
}

#[tokio::test]
async fn test_api_venue_detail_with_fake_names() {
    let state = setup_test_app_state().await;
    let venue_name: String = CompanyName().fake();
    let venue = create_test_venue(&state.db, &venue_name).await;

    let detail: Value = parse_json_response(get(&state, &format!("/api/venues/{}", venue.id)).await).await;

    assert_eq!(detail["id"], venue.id);
    assert_eq!(detail["name"], venue_name.as_str());
    assert_eq!(detail["genres"], json!([]));
    assert_eq!(detail["past_shows"], json!([]));
    assert_eq!(detail["upcoming_shows"], json!([]));
}
