//! JSON endpoints.

use axum::Json;
use axum::extract::State;

use crate::dto::response::MemberResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/members
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = state.member_service.list_with_parents().await?;
    Ok(Json(members.into_iter().map(MemberResponse::from).collect()))
}
