use axum::extract::{Path, State};
use commerce_core::domain::order::{entities::OrderDetailRow, ports::OrderService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AuthUser;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetOrderDetailResponse {
    pub data: OrderDetailRow,
}

#[utoipa::path(
    get,
    path = "/completed/{order_item_no}",
    tag = "order",
    summary = "Get order detail",
    description = "Full detail for one paid order line, including the shipping address.",
    params(
        ("order_item_no" = i64, Path, description = "Order line id"),
    ),
    responses(
        (status = 200, body = GetOrderDetailResponse),
        (status = 404, description = "No paid order line with this id")
    )
)]
pub async fn get_order_detail(
    Path(order_item_no): Path<i64>,
    State(state): State<AppState>,
    AuthUser(_user_no): AuthUser,
) -> Result<Response<GetOrderDetailResponse>, ApiError> {
    let detail = state
        .service
        .get_order_detail(order_item_no)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetOrderDetailResponse { data: detail }))
}
