use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One paid order line in the admin listing.
///
/// Read-only projection over the full join graph; no entity here owns
/// another. `order_item_no` is the per-line id surfaced to clients as the
/// order-detail number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CompletedOrderRow {
    pub order_time: NaiveDateTime,
    pub order_no: i64,
    pub order_item_no: i64,
    pub product_name: String,
    pub size: String,
    pub color: String,
    pub price: i64,
    pub quantity: i32,
    pub user_name: String,
    pub phone_number: String,
    pub order_status: String,
}

/// Richer per-order projection, including the shipping address fields.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OrderDetailRow {
    pub order_no: i64,
    pub order_time: NaiveDateTime,
    pub order_item_no: i64,
    pub paid_time: NaiveDateTime,
    pub order_status: String,
    pub orderer: String,
    pub phone_number: String,
    pub product_no: i64,
    pub product_name: String,
    pub price: i64,
    pub color: String,
    pub size: String,
    pub quantity: i32,
    pub user_no: i64,
    pub receiver: String,
    pub address: String,
    pub delivery_request: Option<String>,
}
