use axum::extract::{Query, State};
use commerce_core::domain::order::{
    entities::CompletedOrderRow, ports::OrderService, value_objects::Paginated,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AuthUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};
use crate::application::http::user::validators::UserOrdersParams;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetUserOrdersResponse {
    pub data: Paginated<CompletedOrderRow>,
}

#[utoipa::path(
    get,
    path = "/me/orders",
    tag = "user",
    summary = "List own orders",
    description = "The authenticated user's completed orders, newest first.",
    params(UserOrdersParams),
    responses(
        (status = 200, body = GetUserOrdersResponse)
    )
)]
pub async fn get_user_orders(
    State(state): State<AppState>,
    AuthUser(user_no): AuthUser,
    Query(params): Query<UserOrdersParams>,
) -> Result<Response<GetUserOrdersResponse>, ApiError> {
    let orders = state
        .service
        .list_user_orders(user_no, params.page_window())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetUserOrdersResponse { data: orders }))
}
