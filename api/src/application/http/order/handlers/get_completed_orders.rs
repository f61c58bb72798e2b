use axum::extract::{Query, State};
use commerce_core::domain::order::{
    entities::CompletedOrderRow, ports::OrderService, value_objects::Paginated,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AuthUser;
use crate::application::http::order::validators::CompletedOrderListParams;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCompletedOrdersResponse {
    pub data: Paginated<CompletedOrderRow>,
}

#[utoipa::path(
    get,
    path = "/completed",
    tag = "order",
    summary = "List completed orders",
    description = "Paid order lines, filtered by date range, product, orderer or order ids, newest first by default.",
    params(CompletedOrderListParams),
    responses(
        (status = 200, body = GetCompletedOrdersResponse)
    )
)]
pub async fn get_completed_orders(
    State(state): State<AppState>,
    AuthUser(_user_no): AuthUser,
    Query(params): Query<CompletedOrderListParams>,
) -> Result<Response<GetCompletedOrdersResponse>, ApiError> {
    let page = params.page_window();
    let filter = params.try_into_filter()?;

    let orders = state
        .service
        .list_completed_orders(filter, page)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCompletedOrdersResponse { data: orders }))
}
