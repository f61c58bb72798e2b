use axum::RequestPartsExt;
use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Authenticated caller, identified by the `sub` claim of a verified access
/// token. Rejects the request when the bearer token is missing, malformed,
/// signed with another key or expired.
pub struct AuthUser(pub i64);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token_from_bearer(parts).await?;
        let app_state = AppState::from_ref(state);

        let claim = app_state
            .service
            .token_manager
            .verify(&token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(AuthUser(claim.sub))
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError::Unauthorized("Missing bearer token".to_string()))?;

    Ok(bearer.token().to_string())
}
