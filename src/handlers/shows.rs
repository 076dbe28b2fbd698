use axum::{extract::State, http::StatusCode, response::Html, Form};
use chrono::Utc;

use crate::{
    db::{entities::show, repositories::ShowRepository},
    error::Result,
    forms::{FormFields, ShowForm},
    services::catalog,
    state::AppState,
    templates::{home_page, show_form_page, shows_page, Notice},
};

pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>> {
    let shows = catalog::show_rows(&state.db).await?;
    Ok(Html(shows_page(&shows).into_string()))
}

pub async fn create_show_form() -> Html<String> {
    Html(show_form_page().into_string())
}

async fn insert_show(state: &AppState, fields: &FormFields) -> Result<show::Model> {
    let form = ShowForm::parse(fields, Utc::now())?;
    ShowRepository::new(state.db.clone()).create(&form).await
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    let fields = FormFields::from(pairs);

    let (status, notice) = match insert_show(&state, &fields).await {
        Ok(show) => {
            tracing::info!(
                "Listed show {} (artist {} at venue {})",
                show.id,
                show.artist_id,
                show.venue_id
            );
            (StatusCode::OK, Notice::success("Show was successfully listed!"))
        }
        Err(err) => {
            err.log();
            (
                err.status(),
                Notice::error("Show was not created. Make sure the artist and the venue exist"),
            )
        }
    };

    (status, Html(home_page(Some(&notice)).into_string()))
}
