use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::user::models::Username;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponseData>, ApiError> {
    // A username that does not parse cannot exist in the store; it takes the
    // same unknown-account path as a well-formed miss.
    let account = match Username::new(body.username.clone()) {
        Ok(username) => match state.user_service.get_user_by_username(&username).await {
            Ok(user) => Some(user),
            Err(UserError::NotFoundByUsername(_)) => None,
            Err(e) => return Err(ApiError::from(e)),
        },
        Err(_) => None,
    };

    let claims = auth::Claims::for_subject(body.username, state.jwt_expiration_hours);

    // Password check and token issuance. The unknown-account and
    // wrong-password paths fail identically inside the authenticator.
    let result = state
        .authenticator
        .authenticate(
            &body.password,
            account.as_ref().map(|user| user.password_hash.as_str()),
            &claims,
        )
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid username or password".to_string())
            }
            auth::AuthenticationError::JwtError(err) => {
                tracing::error!(error = %err, "Token issuance failed");
                ApiError::InternalServerError("Internal server error".to_string())
            }
        })?;

    Ok(Json(LoginResponseData {
        jwt: result.access_token,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub jwt: String,
}
