use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::request::Parts;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::user::models::Username;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity resolved from a valid bearer token, attached to the request's
/// extensions for the duration of that request only.
#[derive(Debug, Clone)]
pub struct Identity {
    pub username: Username,
}

/// Authentication gate for protected routes.
///
/// Runs once per request, before the handler. It never rejects: a missing,
/// malformed, expired, or unresolvable token leaves the request
/// unauthenticated and the chain continues — whether an unauthenticated
/// request is acceptable is the route's decision, made through [`CurrentUser`].
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    if let Some(token) = bearer_token(&req) {
        if let Some(identity) = resolve_identity(&state, token).await {
            req.extensions_mut().insert(identity);
        }
    }

    next.run(req).await
}

/// Verify the token and resolve its subject to a stored account.
///
/// The signature is checked before any claim is used; a subject that no
/// longer resolves (account removed after issuance, or not a valid username)
/// yields no identity.
async fn resolve_identity(state: &AppState, token: &str) -> Option<Identity> {
    let claims: auth::Claims = match state.authenticator.validate_token(token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!(error = %e, "Bearer token rejected");
            return None;
        }
    };

    let username = match Username::new(claims.sub) {
        Ok(username) => username,
        Err(e) => {
            tracing::warn!(error = %e, "Token subject is not a valid username");
            return None;
        }
    };

    match state.user_service.get_user_by_username(&username).await {
        Ok(user) => Some(Identity {
            username: user.username,
        }),
        Err(e) => {
            tracing::warn!(error = %e, subject = %username, "Token subject does not resolve to an account");
            None
        }
    }
}

fn bearer_token(req: &Request) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Extractor for handlers that require an authenticated caller.
///
/// Pulls the [`Identity`] the gate attached; rejects with 401 when the
/// request reached the handler unauthenticated.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;

    use super::*;

    fn request_with_header(value: Option<&str>) -> Request {
        let builder = http::Request::builder().uri("/getUser");
        let builder = match value {
            Some(value) => builder.header(http::header::AUTHORIZATION, value),
            None => builder,
        };
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let req = request_with_header(None);
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let req = request_with_header(Some("Basic dXNlcjpwYXNz"));
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn test_bearer_token_extracted() {
        let req = request_with_header(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&req), Some("abc.def.ghi"));
    }
}
