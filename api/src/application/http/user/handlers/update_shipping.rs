use axum::extract::State;
use commerce_core::domain::user::ports::UserService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AuthUser;
use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ValidateJson},
        response::Response,
    },
    app_state::AppState,
};
use crate::application::http::user::validators::UpdateShippingValidator;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateShippingResponse {
    pub message: String,
}

#[utoipa::path(
    put,
    path = "/me/shipping-detail",
    tag = "user",
    summary = "Update shipping detail",
    description = "Replaces the saved shipping address of the authenticated user.",
    request_body = UpdateShippingValidator,
    responses(
        (status = 200, body = UpdateShippingResponse),
        (status = 404, description = "User has no shipping row yet")
    )
)]
pub async fn update_shipping(
    State(state): State<AppState>,
    AuthUser(user_no): AuthUser,
    ValidateJson(payload): ValidateJson<UpdateShippingValidator>,
) -> Result<Response<UpdateShippingResponse>, ApiError> {
    state
        .service
        .update_shipping_detail(user_no, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateShippingResponse {
        message: "shipping detail updated".to_string(),
    }))
}
