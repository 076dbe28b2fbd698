use axum::response::Html;

use crate::templates::home_page;

pub async fn index() -> Html<String> {
    Html(home_page(None).into_string())
}
