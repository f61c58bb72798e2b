use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    get_orderer_info::{__path_get_orderer_info, get_orderer_info},
    get_user_orders::{__path_get_user_orders, get_user_orders},
    sign_in::{__path_sign_in, sign_in},
    update_shipping::{__path_update_shipping, update_shipping},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(sign_in, get_orderer_info, get_user_orders, update_shipping))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/signin", state.args.server.root_path),
            post(sign_in),
        )
        .route(
            &format!("{}/users/me/orderer-info", state.args.server.root_path),
            get(get_orderer_info),
        )
        .route(
            &format!("{}/users/me/orders", state.args.server.root_path),
            get(get_user_orders),
        )
        .route(
            &format!("{}/users/me/shipping-detail", state.args.server.root_path),
            put(update_shipping),
        )
}
