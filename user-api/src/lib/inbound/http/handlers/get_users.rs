use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::UserResponseData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Return all registered users.
pub async fn get_users(
    State(state): State<AppState>,
    CurrentUser(_identity): CurrentUser,
) -> Result<Json<Vec<UserResponseData>>, ApiError> {
    let users = state
        .user_service
        .list_users()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(users.iter().map(UserResponseData::from).collect()))
}
