use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateShippingInput {
    pub receiver: String,
    pub phone_number: String,
    pub address: String,
    pub additional_address: Option<String>,
    pub zip_code: String,
}
