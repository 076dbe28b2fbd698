use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use crate::{
    error::ApiResult,
    services::catalog::{self, Area, ArtistDetail, ArtistListItem, ShowRow, VenueDetail},
    state::AppState,
};

pub async fn list_venues(State(state): State<AppState>) -> ApiResult<Json<Vec<Area>>> {
    Ok(Json(catalog::venue_areas(&state.db, Utc::now()).await?))
}

pub async fn get_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<VenueDetail>> {
    Ok(Json(catalog::venue_detail(&state.db, id, Utc::now()).await?))
}

pub async fn list_artists(State(state): State<AppState>) -> ApiResult<Json<Vec<ArtistListItem>>> {
    Ok(Json(catalog::list_artists(&state.db).await?))
}

pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<ArtistDetail>> {
    Ok(Json(catalog::artist_detail(&state.db, id, Utc::now()).await?))
}

pub async fn list_shows(State(state): State<AppState>) -> ApiResult<Json<Vec<ShowRow>>> {
    Ok(Json(catalog::show_rows(&state.db).await?))
}
