use bytes::Bytes;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fields for the `product_details` row inserted alongside a new product.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateProductInput {
    pub sell: bool,
    pub exhibition: bool,
    pub main_category_no: i64,
    pub sub_category_no: i64,
    pub name: String,
    pub simple_description: Option<String>,
    pub detail_information: String,
    pub price: i64,
    pub discount_rate: Option<i32>,
    pub discount_start: Option<NaiveDateTime>,
    pub discount_end: Option<NaiveDateTime>,
    pub min_sales_quantity: i32,
    pub max_sales_quantity: i32,
}

/// One raw uploaded image, keyed by its multipart field name
/// (`product_image_1` .. `product_image_5`).
#[derive(Debug, Clone)]
pub struct ProductImageUpload {
    pub field_name: String,
    pub data: Bytes,
}

/// Lookup key for the seller-product query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SellerProductKey {
    pub product_no: i64,
    pub color_no: i64,
    pub size_no: i64,
}

/// Resized-and-uploaded image set, ready to be persisted with the product.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImageSet {
    pub field_name: String,
    pub large_url: String,
    pub medium_url: String,
    pub small_url: String,
    pub is_main: bool,
}
