use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_product::{__path_create_product, create_product},
    get_products::{__path_get_products, get_products},
    get_seller_product::{__path_get_seller_product, get_seller_product},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(create_product, get_products, get_seller_product))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/products", state.args.server.root_path),
            post(create_product).get(get_products),
        )
        .route(
            &format!("{}/products/seller-product", state.args.server.root_path),
            get(get_seller_product),
        )
}
