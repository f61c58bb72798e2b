use utoipa::OpenApi;

use crate::application::http::{
    order::router::OrderApiDoc, product::router::ProductApiDoc, user::router::UserApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Commerce API"
    ),
    nest(
        (path = "/orders", api = OrderApiDoc),
        (path = "/products", api = ProductApiDoc),
        (path = "/users", api = UserApiDoc),
    )
)]
pub struct ApiDoc;
