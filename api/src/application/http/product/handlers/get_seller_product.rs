use axum::extract::{Query, State};
use commerce_core::domain::product::{entities::SellerProductInfo, ports::ProductService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::auth::AuthUser;
use crate::application::http::product::validators::SellerProductParams;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSellerProductResponse {
    pub data: SellerProductInfo,
}

#[utoipa::path(
    get,
    path = "/seller-product",
    tag = "product",
    summary = "Get seller product",
    description = "Price, name and thumbnail for one (product, color, size) combination, from the currently-effective detail row.",
    params(SellerProductParams),
    responses(
        (status = 200, body = GetSellerProductResponse),
        (status = 404, description = "No such combination")
    )
)]
pub async fn get_seller_product(
    State(state): State<AppState>,
    AuthUser(_user_no): AuthUser,
    Query(params): Query<SellerProductParams>,
) -> Result<Response<GetSellerProductResponse>, ApiError> {
    let info = state
        .service
        .get_seller_product(params.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetSellerProductResponse { data: info }))
}
