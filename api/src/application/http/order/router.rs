use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    get_completed_orders::{__path_get_completed_orders, get_completed_orders},
    get_order_detail::{__path_get_order_detail, get_order_detail},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_completed_orders, get_order_detail))]
pub struct OrderApiDoc;

pub fn order_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/orders/completed", state.args.server.root_path),
            get(get_completed_orders),
        )
        .route(
            &format!(
                "{}/orders/completed/{{order_item_no}}",
                state.args.server.root_path
            ),
            get(get_order_detail),
        )
}
