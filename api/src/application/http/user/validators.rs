use commerce_core::domain::order::value_objects::PageWindow;
use commerce_core::domain::user::value_objects::{SignInInput, UpdateShippingInput};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct SignInValidator {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

impl From<SignInValidator> for SignInInput {
    fn from(payload: SignInValidator) -> Self {
        SignInInput {
            email: payload.email,
            password: payload.password,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserOrdersParams {
    #[param(example = 1)]
    pub page: Option<i64>,
    #[param(example = 10)]
    pub limit: Option<i64>,
}

impl UserOrdersParams {
    pub fn page_window(&self) -> PageWindow {
        PageWindow::new(self.page.unwrap_or(1), self.limit.unwrap_or(10))
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateShippingValidator {
    #[validate(length(min = 1, message = "receiver must not be empty"))]
    pub receiver: String,
    #[validate(length(min = 1, message = "phone_number must not be empty"))]
    pub phone_number: String,
    #[validate(length(min = 1, message = "address must not be empty"))]
    pub address: String,
    pub additional_address: Option<String>,
    #[validate(length(min = 1, message = "zip_code must not be empty"))]
    pub zip_code: String,
}

impl From<UpdateShippingValidator> for UpdateShippingInput {
    fn from(payload: UpdateShippingValidator) -> Self {
        UpdateShippingInput {
            receiver: payload.receiver,
            phone_number: payload.phone_number,
            address: payload.address,
            additional_address: payload.additional_address,
            zip_code: payload.zip_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_email() {
        let payload = SignInValidator {
            email: "not-an-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_empty_password() {
        let payload = SignInValidator {
            email: "user@example.com".to_string(),
            password: String::new(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn shipping_requires_core_fields() {
        let payload = UpdateShippingValidator {
            receiver: "Kim".to_string(),
            phone_number: "010-1234-5678".to_string(),
            address: "1 Main St".to_string(),
            additional_address: None,
            zip_code: "04524".to_string(),
        };
        assert!(payload.validate().is_ok());

        let payload = UpdateShippingValidator {
            receiver: String::new(),
            ..payload
        };
        assert!(payload.validate().is_err());
    }
}
