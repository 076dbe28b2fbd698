//! Integration tests for show listing and creation

mod common;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;
use serde_json::Value;

use common::*;
use showbook::db::entities::show;
use showbook::test_utils::*;

const FAILURE: &str = "Show was not created. Make sure the artist and the venue exist";

#[tokio::test]
async fn test_create_show() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let venue = create_test_venue(&state.db, "The Fillmore").await;

    let response = post_form(
        &state,
        "/shows/create",
        &[
            ("artist_id", artist.id.to_string().as_str()),
            ("venue_id", venue.id.to_string().as_str()),
            ("start_time", "2035-04-01 20:00:00"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Show was successfully listed!"));

    let shows = show::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].artist_id, artist.id);
    assert_eq!(shows[0].venue_id, venue.id);
    assert_eq!(
        shows[0].start_time.with_timezone(&Utc),
        Utc.with_ymd_and_hms(2035, 4, 1, 20, 0, 0).unwrap()
    );
}

#[tokio::test]
async fn test_create_show_defaults_start_time_to_now() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let venue = create_test_venue(&state.db, "The Fillmore").await;
    let before = Utc::now();

    post_form(
        &state,
        "/shows/create",
        &[
            ("artist_id", artist.id.to_string().as_str()),
            ("venue_id", venue.id.to_string().as_str()),
        ],
    )
    .await;

    let created = show::Entity::find().one(&state.db).await.unwrap().unwrap();
    let start = created.start_time.with_timezone(&Utc);
    assert!(start >= before - chrono::Duration::seconds(1));
    assert!(start <= Utc::now());
}

#[tokio::test]
async fn test_create_show_with_unknown_artist() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Fillmore").await;

    let response = post_form(
        &state,
        "/shows/create",
        &[
            ("artist_id", "99999"),
            ("venue_id", venue.id.to_string().as_str()),
            ("start_time", "2035-04-01T20:00:00Z"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_text(response).await;
    assert!(body.contains(FAILURE));
    assert!(show::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_show_with_unknown_venue() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let response = post_form(
        &state,
        "/shows/create",
        &[
            ("artist_id", artist.id.to_string().as_str()),
            ("venue_id", "99999"),
        ],
    )
    .await;

    let body = body_text(response).await;
    assert!(body.contains(FAILURE));
    assert!(show::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_show_with_bad_input() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    let venue = create_test_venue(&state.db, "The Fillmore").await;

    let response = post_form(
        &state,
        "/shows/create",
        &[
            ("artist_id", "abc"),
            ("venue_id", venue.id.to_string().as_str()),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(response).await.contains(FAILURE));

    let response = post_form(
        &state,
        "/shows/create",
        &[
            ("artist_id", artist.id.to_string().as_str()),
            ("venue_id", venue.id.to_string().as_str()),
            ("start_time", "next friday"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(show::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_shows_ordered_by_start_time() {
    let state = setup_test_app_state().await;
    let sax = create_test_artist(&state.db, "The Wild Sax Band").await;
    let petals = create_test_artist(&state.db, "Guns N Petals").await;
    let venue = create_test_venue(&state.db, "The Musical Hop").await;
    create_test_show(&state.db, sax.id, venue.id, days_from_now(20)).await;
    create_test_show(&state.db, petals.id, venue.id, days_from_now(-20)).await;

    let shows: Value = parse_json_response(get(&state, "/api/shows").await).await;
    let shows = shows.as_array().unwrap();
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0]["artist_name"], "Guns N Petals");
    assert_eq!(shows[1]["artist_name"], "The Wild Sax Band");
    assert_eq!(shows[0]["venue_name"], "The Musical Hop");
    assert_eq!(shows[0]["venue_id"], venue.id);

    let response = get(&state, "/shows").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("The Wild Sax Band"));
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_create_show_form_renders() {
    let state = setup_test_app_state().await;

    let body = body_text(get(&state, "/shows/create").await).await;
    assert!(body.contains(r#"name="artist_id""#));
    assert!(body.contains(r#"name="venue_id""#));
    assert!(body.contains(r#"name="start_time""#));
}
