pub mod api;
pub mod artists;
pub mod errors;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Server-rendered pages and form submissions
pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))

        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route("/venues/create", get(venues::create_venue_form))
        .route("/venues/create", post(venues::create_venue_submission))
        .route("/venues/:id", get(venues::show_venue).delete(venues::delete_venue))
        .route("/venues/:id/edit", get(venues::edit_venue))
        .route("/venues/:id/edit", post(venues::edit_venue_submission))

        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route("/artists/create", get(artists::create_artist_form))
        .route("/artists/create", post(artists::create_artist_submission))
        .route("/artists/:id", get(artists::show_artist))
        .route("/artists/:id/edit", get(artists::edit_artist))
        .route("/artists/:id/edit", post(artists::edit_artist_submission))

        // Shows
        .route("/shows", get(shows::list_shows))
        .route("/shows/create", get(shows::create_show_form))
        .route("/shows/create", post(shows::create_show_submission))
}

/// Read-only JSON views of the same data
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(api::list_venues))
        .route("/venues/:id", get(api::get_venue))
        .route("/artists", get(api::list_artists))
        .route("/artists/:id", get(api::get_artist))
        .route("/shows", get(api::list_shows))
}

/// Full application router; `main` and the integration tests share it.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
        .merge(html_routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(errors::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
