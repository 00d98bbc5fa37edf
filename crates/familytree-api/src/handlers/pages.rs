//! Read-only HTML pages.

use axum::extract::State;
use axum::response::Html;

use crate::error::PageError;
use crate::state::AppState;
use crate::views;

/// GET /
pub async fn index() -> Html<String> {
    Html(views::pages::index())
}

/// GET /view
pub async fn view_tree() -> Html<String> {
    Html(views::pages::tree())
}

/// GET /display
pub async fn display(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let members = state.member_service.list_members().await?;
    Ok(Html(views::member::display(&members)))
}
