use chrono::NaiveDateTime;
use commerce_core::domain::product::value_objects::{CreateProductInput, SellerProductKey};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_min_sales_quantity() -> i32 {
    1
}

fn default_max_sales_quantity() -> i32 {
    20
}

/// JSON payload carried in the `product` part of the multipart upload.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProductValidator {
    pub sell: bool,
    pub exhibition: bool,
    pub main_category_no: i64,
    pub sub_category_no: i64,
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
    pub simple_description: Option<String>,
    #[validate(length(min = 1, message = "detail_information must not be empty"))]
    pub detail_information: String,
    #[validate(range(min = 0, message = "price must not be negative"))]
    pub price: i64,
    #[validate(range(min = 0, max = 99, message = "discount_rate must be between 0 and 99"))]
    pub discount_rate: Option<i32>,
    pub discount_start: Option<NaiveDateTime>,
    pub discount_end: Option<NaiveDateTime>,
    #[validate(range(min = 1, message = "min_sales_quantity must be at least 1"))]
    #[serde(default = "default_min_sales_quantity")]
    pub min_sales_quantity: i32,
    #[validate(range(min = 1, message = "max_sales_quantity must be at least 1"))]
    #[serde(default = "default_max_sales_quantity")]
    pub max_sales_quantity: i32,
}

impl From<CreateProductValidator> for CreateProductInput {
    fn from(payload: CreateProductValidator) -> Self {
        CreateProductInput {
            sell: payload.sell,
            exhibition: payload.exhibition,
            main_category_no: payload.main_category_no,
            sub_category_no: payload.sub_category_no,
            name: payload.name,
            simple_description: payload.simple_description,
            detail_information: payload.detail_information,
            price: payload.price,
            discount_rate: payload.discount_rate,
            discount_start: payload.discount_start,
            discount_end: payload.discount_end,
            min_sales_quantity: payload.min_sales_quantity,
            max_sales_quantity: payload.max_sales_quantity,
        }
    }
}

/// Lookup parameters for one (product, color, size) combination.
#[derive(Debug, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SellerProductParams {
    pub product_no: i64,
    pub color_no: i64,
    pub size_no: i64,
}

impl From<SellerProductParams> for SellerProductKey {
    fn from(params: SellerProductParams) -> Self {
        SellerProductKey {
            product_no: params.product_no,
            color_no: params.color_no,
            size_no: params.size_no,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CreateProductValidator {
        serde_json::from_str(
            r#"{
                "sell": true,
                "exhibition": true,
                "main_category_no": 1,
                "sub_category_no": 2,
                "name": "Linen shirt",
                "detail_information": "A shirt.",
                "price": 25000
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn sales_quantities_default() {
        let payload = payload();
        assert_eq!(payload.min_sales_quantity, 1);
        assert_eq!(payload.max_sales_quantity, 20);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let mut payload = payload();
        payload.name = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_discount() {
        let mut payload = payload();
        payload.discount_rate = Some(100);
        assert!(payload.validate().is_err());

        payload.discount_rate = Some(30);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn rejects_negative_price() {
        let mut payload = payload();
        payload.price = -1;
        assert!(payload.validate().is_err());
    }
}
