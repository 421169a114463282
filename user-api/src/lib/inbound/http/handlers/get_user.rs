use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::UserResponseData;
use crate::inbound::http::middleware::CurrentUser;
use crate::inbound::http::router::AppState;

/// Return the profile of the authenticated caller.
pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> Result<Json<UserResponseData>, ApiError> {
    state
        .user_service
        .get_user_by_username(&identity.username)
        .await
        .map_err(ApiError::from)
        .map(|ref user| Json(user.into()))
}
