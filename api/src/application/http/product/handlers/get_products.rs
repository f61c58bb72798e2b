use axum::extract::State;
use commerce_core::domain::product::{entities::ProductSummary, ports::ProductService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductsResponse {
    pub data: Vec<ProductSummary>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "List products",
    description = "Storefront listing of active, displayed products with their small thumbnail.",
    responses(
        (status = 200, body = GetProductsResponse)
    )
)]
pub async fn get_products(
    State(state): State<AppState>,
) -> Result<Response<GetProductsResponse>, ApiError> {
    let products = state.service.list_products().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetProductsResponse { data: products }))
}
