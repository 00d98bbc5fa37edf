//! Add and edit handlers.

use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::debug;

use crate::dto::request::{EditAction, MemberForm};
use crate::error::PageError;
use crate::extractors::SubmittedForm;
use crate::state::AppState;
use crate::views;

/// GET /add
pub async fn add_form(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let members = state.member_service.list_members().await?;
    Ok(Html(views::member::add_form(&members)))
}

/// POST /add
pub async fn add_member(
    State(state): State<AppState>,
    mut form: SubmittedForm,
) -> Result<Redirect, PageError> {
    let fields = MemberForm::from_submission(&form)?.into_fields();
    let photo = form.take_photo();

    state.member_service.create_member(fields, photo).await?;
    Ok(Redirect::to("/"))
}

/// GET /edit
pub async fn edit_selection(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let members = state.member_service.list_members_by_last_name().await?;
    Ok(Html(views::member::edit_selection(&members)))
}

/// POST /edit
///
/// With `member_id_hidden` the submitted fields are saved; with only
/// `member_id` the pre-filled form is shown; with neither the selection
/// list is shown again.
pub async fn edit_member(
    State(state): State<AppState>,
    mut form: SubmittedForm,
) -> Result<Response, PageError> {
    let service = &state.member_service;

    match EditAction::from_submission(&form)? {
        EditAction::Select => {
            let members = service.list_members_by_last_name().await?;
            Ok(Html(views::member::edit_selection(&members)).into_response())
        }
        EditAction::Open(id) => {
            debug!(member_id = %id, "Opening member for edit");
            let member = service.get_member(id).await?;
            let members = service.list_members_by_last_name().await?;
            Ok(Html(views::member::edit_form(&member, &members)).into_response())
        }
        EditAction::Commit(id) => {
            let fields = MemberForm::from_submission(&form)?.into_fields();
            let photo = form.take_photo();
            service.update_member(id, fields, photo).await?;
            Ok(Redirect::to("/").into_response())
        }
    }
}
