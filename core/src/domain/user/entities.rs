use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct User {
    pub user_no: i64,
    pub name: String,
    pub email: String,
}

/// Orderer identity plus the saved shipping address. The address fields are
/// nullable: a user may never have saved one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct OrdererInfo {
    pub orderer_name: String,
    pub orderer_email: String,
    pub receiver: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub additional_address: Option<String>,
    pub zip_code: Option<String>,
}

/// Successful sign-in: the user plus a freshly issued access token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SignedInUser {
    pub user: User,
    pub access_token: String,
}
