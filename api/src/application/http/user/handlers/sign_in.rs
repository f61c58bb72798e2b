use axum::extract::State;
use commerce_core::domain::user::{entities::SignedInUser, ports::UserService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};
use crate::application::http::user::validators::SignInValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SignInResponse {
    pub data: SignedInUser,
}

#[utoipa::path(
    post,
    path = "/signin",
    tag = "user",
    summary = "Sign in",
    description = "Verifies the credentials and returns the user together with a fresh access token.",
    request_body = SignInValidator,
    responses(
        (status = 200, body = SignInResponse),
        (status = 401, description = "Unknown email or wrong password")
    )
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SignInValidator>,
) -> Result<Response<SignInResponse>, ApiError> {
    let signed_in = state
        .service
        .sign_in(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SignInResponse { data: signed_in }))
}
