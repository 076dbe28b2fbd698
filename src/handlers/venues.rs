use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::{
    db::{entities::venue, repositories::VenueRepository},
    error::{AppError, Result},
    forms::{FormFields, VenueForm},
    services::catalog,
    state::AppState,
    templates::{
        home_page, search_page, venue_detail_page, venue_form_page, venues_page, Notice,
        SearchKind, VenueFormValues,
    },
};

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Venues grouped by city and state
pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>> {
    let areas = catalog::venue_areas(&state.db, Utc::now()).await?;
    Ok(Html(venues_page(&areas).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let term = form.search_term.trim();
    let results = catalog::search_venues(&state.db, term, Utc::now()).await?;

    tracing::debug!("Venue search '{}' matched {}", term, results.count);
    Ok(Html(search_page(SearchKind::Venues, term, &results).into_string()))
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = catalog::venue_detail(&state.db, id, Utc::now()).await?;
    Ok(Html(venue_detail_page(&venue).into_string()))
}

pub async fn create_venue_form() -> Html<String> {
    let page = venue_form_page(
        "List a new venue",
        "/venues/create",
        &VenueFormValues::default(),
        None,
    );
    Html(page.into_string())
}

async fn insert_venue(state: &AppState, fields: &FormFields) -> Result<venue::Model> {
    let form = VenueForm::parse(fields)?;
    VenueRepository::new(state.db.clone()).create(&form).await
}

/// Creates the venue and lands on the home page with the outcome.
pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    let fields = FormFields::from(pairs);

    let (status, notice) = match insert_venue(&state, &fields).await {
        Ok(venue) => {
            tracing::info!("Listed venue {} ({})", venue.id, venue.name);
            (
                StatusCode::OK,
                Notice::success(format!("Venue {} was successfully listed!", venue.name)),
            )
        }
        Err(err) => {
            err.log();
            let name = fields.get("name").unwrap_or_default();
            (
                err.status(),
                Notice::error(format!(
                    "An error occurred. Venue {} could not be listed.",
                    name
                )),
            )
        }
    };

    (status, Html(home_page(Some(&notice)).into_string()))
}

async fn render_edit_form(
    repo: &VenueRepository,
    id: i32,
    notice: Option<&Notice>,
) -> Result<Html<String>> {
    let venue = repo.get(id).await?;
    let genres = repo.genres(id).await?;
    let values = VenueFormValues::from_model(venue, genres);

    let page = venue_form_page(
        "Edit venue",
        &format!("/venues/{}/edit", id),
        &values,
        notice,
    );
    Ok(Html(page.into_string()))
}

pub async fn edit_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let repo = VenueRepository::new(state.db.clone());
    render_edit_form(&repo, id, None).await
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let fields = FormFields::from(pairs);
    let repo = VenueRepository::new(state.db.clone());

    let result = match VenueForm::parse(&fields) {
        Ok(form) => repo.update(id, &form).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(venue) => {
            tracing::info!("Updated venue {}", venue.id);
            Ok(Redirect::to(&format!("/venues/{}", venue.id)).into_response())
        }
        Err(err @ AppError::NotFound(_)) => Err(err),
        Err(err) => {
            err.log();
            let notice = Notice::error(format!(
                "An error occurred. Venue {} could not be updated. {}",
                id,
                err.public_message()
            ));
            let page = render_edit_form(&repo, id, Some(&notice)).await?;
            Ok((err.status(), page).into_response())
        }
    }
}

/// HTMX delete: JSON body plus an `HX-Redirect` back home.
pub async fn delete_venue(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match VenueRepository::new(state.db.clone()).delete(id).await {
        Ok(()) => {
            tracing::info!("Deleted venue {}", id);
            (
                StatusCode::OK,
                [("HX-Redirect", "/")],
                Json(json!({ "success": true })),
            )
                .into_response()
        }
        Err(err) => {
            err.log();
            (err.status(), Json(json!({ "success": false }))).into_response()
        }
    }
}
