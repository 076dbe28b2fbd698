use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;

use crate::{
    db::{entities::artist, repositories::ArtistRepository},
    error::{AppError, Result},
    forms::{ArtistForm, FormFields},
    handlers::venues::SearchForm,
    services::catalog,
    state::AppState,
    templates::{
        artist_detail_page, artist_form_page, artists_page, home_page, search_page,
        ArtistFormValues, Notice, SearchKind,
    },
};

pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = catalog::list_artists(&state.db).await?;
    Ok(Html(artists_page(&artists).into_string()))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Html<String>> {
    let term = form.search_term.trim();
    let results = catalog::search_artists(&state.db, term, Utc::now()).await?;

    tracing::debug!("Artist search '{}' matched {}", term, results.count);
    Ok(Html(search_page(SearchKind::Artists, term, &results).into_string()))
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = catalog::artist_detail(&state.db, id, Utc::now()).await?;
    Ok(Html(artist_detail_page(&artist).into_string()))
}

pub async fn create_artist_form() -> Html<String> {
    let page = artist_form_page(
        "List a new artist",
        "/artists/create",
        &ArtistFormValues::default(),
        None,
    );
    Html(page.into_string())
}

async fn insert_artist(state: &AppState, fields: &FormFields) -> Result<artist::Model> {
    let form = ArtistForm::parse(fields)?;
    ArtistRepository::new(state.db.clone()).create(&form).await
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    let fields = FormFields::from(pairs);

    let (status, notice) = match insert_artist(&state, &fields).await {
        Ok(artist) => {
            tracing::info!("Listed artist {} ({})", artist.id, artist.name);
            (
                StatusCode::OK,
                Notice::success(format!("Artist {} was successfully listed!", artist.name)),
            )
        }
        Err(err) => {
            err.log();
            let name = fields.get("name").unwrap_or_default();
            (
                err.status(),
                Notice::error(format!(
                    "An error occurred. Artist {} could not be listed.",
                    name
                )),
            )
        }
    };

    (status, Html(home_page(Some(&notice)).into_string()))
}

async fn render_edit_form(
    repo: &ArtistRepository,
    id: i32,
    notice: Option<&Notice>,
) -> Result<Html<String>> {
    let artist = repo.get(id).await?;
    let genres = repo.genres(id).await?;
    let values = ArtistFormValues::from_model(artist, genres);

    let page = artist_form_page(
        "Edit artist",
        &format!("/artists/{}/edit", id),
        &values,
        notice,
    );
    Ok(Html(page.into_string()))
}

pub async fn edit_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let repo = ArtistRepository::new(state.db.clone());
    render_edit_form(&repo, id, None).await
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let fields = FormFields::from(pairs);
    let repo = ArtistRepository::new(state.db.clone());

    let result = match ArtistForm::parse(&fields) {
        Ok(form) => repo.update(id, &form).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(artist) => {
            tracing::info!("Updated artist {}", artist.id);
            Ok(Redirect::to(&format!("/artists/{}", artist.id)).into_response())
        }
        Err(err @ AppError::NotFound(_)) => Err(err),
        Err(err) => {
            err.log();
            let notice = Notice::error(format!(
                "An error occurred. Artist {} could not be updated. {}",
                id,
                err.public_message()
            ));
            let page = render_edit_form(&repo, id, Some(&notice)).await?;
            Ok((err.status(), page).into_response())
        }
    }
}
