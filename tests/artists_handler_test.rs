//! Integration tests for artist routes

mod common;

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;
use serde_json::{json, Value};

use common::*;
use showbook::db::entities::artist;
use showbook::test_utils::*;

#[tokio::test]
async fn test_create_artist() {
    let state = setup_test_app_state().await;

    let response = post_form(
        &state,
        "/artists/create",
        &[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("phone", "326-123-5000"),
            ("website", "https://www.gunsnpetalsband.com"),
            ("genres", "Rock n Roll"),
            ("seeking_venue", "false"),
            ("seeking_venue", "y"),
            ("seeking_description", "Looking for shows to perform at in the San Francisco Bay Area!"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Artist Guns N Petals was successfully listed!"));

    let created = artist::Entity::find().one(&state.db).await.unwrap().unwrap();
    assert_eq!(created.name, "Guns N Petals");
    assert_eq!(created.website.as_deref(), Some("https://www.gunsnpetalsband.com"));
    assert!(created.seeking_venue);

    let detail: Value = parse_json_response(get(&state, &format!("/api/artists/{}", created.id)).await).await;
    assert_eq!(detail["genres"], json!(["Rock n Roll"]));
    assert_eq!(detail["upcoming_shows_count"], 0);
}

#[tokio::test]
async fn test_create_artist_with_bad_flag_fails() {
    let state = setup_test_app_state().await;

    let response = post_form(
        &state,
        "/artists/create",
        &[
            ("name", "Matt Quevedo"),
            ("city", "New York"),
            ("state", "NY"),
            ("seeking_venue", "maybe"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_text(response).await;
    assert!(body.contains("An error occurred. Artist Matt Quevedo could not be listed."));
    assert!(artist::Entity::find().all(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_artists_ordered_by_id() {
    let state = setup_test_app_state().await;
    let first = create_test_artist(&state.db, "The Wild Sax Band").await;
    let second = create_test_artist(&state.db, "Guns N Petals").await;

    let artists: Value = parse_json_response(get(&state, "/api/artists").await).await;
    assert_eq!(
        artists,
        json!([
            { "id": first.id, "name": "The Wild Sax Band" },
            { "id": second.id, "name": "Guns N Petals" },
        ])
    );

    let page = body_text(get(&state, "/artists").await).await;
    assert!(page.contains("The Wild Sax Band"));
    assert!(page.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_search_artists() {
    let state = setup_test_app_state().await;
    let sax = create_test_artist(&state.db, "The Wild Sax Band").await;
    create_test_artist(&state.db, "Guns N Petals").await;
    let venue = create_test_venue(&state.db, "The Fillmore").await;
    create_test_show(&state.db, sax.id, venue.id, days_from_now(2)).await;

    let body = body_text(post_form(&state, "/artists/search", &[("search_term", "BAND")]).await).await;

    assert!(body.contains(r#"<span id="result-count">1</span>"#));
    assert!(body.contains(&format!(r#"href="/artists/{}""#, sax.id)));
    assert!(body.contains("1 upcoming shows"));

    let body = body_text(post_form(&state, "/artists/search", &[("search_term", "Drake")]).await).await;
    assert!(body.contains(r#"<span id="result-count">0</span>"#));
}

#[tokio::test]
async fn test_artist_detail_lists_venues() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "The Wild Sax Band").await;
    let venue = create_test_venue(&state.db, "Park Square Live Music").await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(-1)).await;
    create_test_show(&state.db, artist.id, venue.id, days_from_now(1)).await;

    let response = get(&state, &format!("/artists/{}", artist.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"<span id="upcoming-count">1</span>"#));
    assert!(body.contains(r#"<span id="past-count">1</span>"#));
    assert!(body.contains(&format!(r#"href="/venues/{}""#, venue.id)));

    let detail: Value = parse_json_response(get(&state, &format!("/api/artists/{}", artist.id)).await).await;
    assert_eq!(detail["upcoming_shows"][0]["venue_name"], "Park Square Live Music");
}

#[tokio::test]
async fn test_artist_detail_not_found() {
    let state = setup_test_app_state().await;

    let response = get(&state, "/artists/404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_artist_overwrites_only_submitted_fields() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let response = post_form(
        &state,
        &format!("/artists/{}/edit", artist.id),
        &[("city", "Oakland"), ("phone", "")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers()[header::LOCATION],
        format!("/artists/{}", artist.id).as_str()
    );

    let updated = artist::Entity::find_by_id(artist.id)
        .one(&state.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Guns N Petals");
    assert_eq!(updated.city, "Oakland");
    assert_eq!(updated.state, "CA");
    assert_eq!(updated.phone, None);
    assert!(!updated.seeking_venue);
}

#[tokio::test]
async fn test_edit_artist_clears_genres_when_none_selected() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    post_form(
        &state,
        &format!("/artists/{}/edit", artist.id),
        &[("genres", ""), ("genres", "Rock n Roll")],
    )
    .await;
    let detail: Value = parse_json_response(get(&state, &format!("/api/artists/{}", artist.id)).await).await;
    assert_eq!(detail["genres"], json!(["Rock n Roll"]));

    post_form(&state, &format!("/artists/{}/edit", artist.id), &[("genres", "")]).await;

    let detail: Value = parse_json_response(get(&state, &format!("/api/artists/{}", artist.id)).await).await;
    assert_eq!(detail["genres"], json!([]));
}

#[tokio::test]
async fn test_edit_artist_form_is_prefilled() {
    let state = setup_test_app_state().await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let body = body_text(get(&state, &format!("/artists/{}/edit", artist.id)).await).await;
    assert!(body.contains(r#"value="Guns N Petals""#));
    assert!(body.contains(r#"value="326-123-5000""#));
    assert!(body.contains(&format!(r#"action="/artists/{}/edit""#, artist.id)));
}
