use axum::extract::{Multipart, State};
use commerce_core::domain::product::{
    entities::CreatedProduct,
    ports::ProductService,
    value_objects::{CreateProductInput, ProductImageUpload},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::auth::AuthUser;
use crate::application::http::product::validators::CreateProductValidator;
use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateProductResponse {
    pub data: CreatedProduct,
}

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Create product",
    description = "Registers a product from a multipart upload: a `product` JSON part plus up to five `product_image_N` parts. Images are resized to three sizes and uploaded before the product is inserted.",
    responses(
        (status = 201, body = CreateProductResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    AuthUser(_user_no): AuthUser,
    mut multipart: Multipart,
) -> Result<Response<CreateProductResponse>, ApiError> {
    let mut payload: Option<CreateProductValidator> = None;
    let mut images: Vec<ProductImageUpload> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("invalid multipart payload: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "product" {
            let text = field
                .text()
                .await
                .map_err(|e| ApiError::BadRequest(format!("invalid 'product' part: {e}")))?;
            let validator: CreateProductValidator = serde_json::from_str(&text)
                .map_err(|e| ApiError::BadRequest(format!("invalid 'product' part: {e}")))?;
            validator
                .validate()
                .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
            payload = Some(validator);
        } else if name.starts_with("product_image_") {
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("invalid '{name}' part: {e}")))?;
            if !data.is_empty() {
                images.push(ProductImageUpload {
                    field_name: name,
                    data,
                });
            }
        }
    }

    let payload =
        payload.ok_or_else(|| ApiError::BadRequest("missing 'product' part".to_string()))?;

    let created = state
        .service
        .create_product(CreateProductInput::from(payload), images)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateProductResponse { data: created }))
}
