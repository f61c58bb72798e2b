use axum::extract::State;
use commerce_core::domain::user::{entities::OrdererInfo, ports::UserService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AuthUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetOrdererInfoResponse {
    pub data: OrdererInfo,
}

#[utoipa::path(
    get,
    path = "/me/orderer-info",
    tag = "user",
    summary = "Get orderer info",
    description = "Name, email and the saved shipping address of the authenticated user.",
    responses(
        (status = 200, body = GetOrdererInfoResponse)
    )
)]
pub async fn get_orderer_info(
    State(state): State<AppState>,
    AuthUser(user_no): AuthUser,
) -> Result<Response<GetOrdererInfoResponse>, ApiError> {
    let info = state
        .service
        .get_orderer_info(user_no)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetOrdererInfoResponse { data: info }))
}
