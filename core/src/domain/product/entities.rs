use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One visible product in the storefront listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductSummary {
    pub product_no: i64,
    pub thumbnail_image: String,
    pub product_name: String,
    pub price: i64,
    pub discount_rate: Option<i32>,
}

/// Price/image/variant info for one (product, color, size) combination,
/// taken from the currently-effective detail row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SellerProductInfo {
    pub product_no: i64,
    pub color_name: String,
    pub size_name: String,
    pub name: String,
    pub discount_rate: Option<i32>,
    pub price: i64,
    pub image_small: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreatedProduct {
    pub product_no: i64,
    pub product_detail_no: i64,
    pub images: Vec<ProductImageUrls>,
}

/// URL triple returned for every uploaded product image.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProductImageUrls {
    pub field_name: String,
    pub large: String,
    pub medium: String,
    pub small: String,
}
