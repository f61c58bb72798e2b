use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{OrdererInfo, SignedInUser, User},
        value_objects::{SignInInput, UpdateShippingInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    /// Verifies the credentials and issues an access token. Unknown email
    /// and wrong password are indistinguishable to the caller.
    fn sign_in(
        &self,
        input: SignInInput,
    ) -> impl Future<Output = Result<SignedInUser, CoreError>> + Send;

    /// Orderer identity and saved shipping address for an authenticated
    /// user; a failed lookup here is an authorization failure, not a 404.
    fn get_orderer_info(
        &self,
        user_no: i64,
    ) -> impl Future<Output = Result<OrdererInfo, CoreError>> + Send;

    fn update_shipping_detail(
        &self,
        user_no: i64,
        input: UpdateShippingInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_no: i64,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// PHC-string password hash for the user, if one is stored.
    fn get_password_hash(
        &self,
        user_no: i64,
    ) -> impl Future<Output = Result<Option<String>, CoreError>> + Send;

    fn touch_last_access(&self, user_no: i64)
    -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_orderer_info(
        &self,
        user_no: i64,
    ) -> impl Future<Output = Result<Option<OrdererInfo>, CoreError>> + Send;

    /// Returns the number of updated rows; zero means the user has no
    /// shipping row yet.
    fn update_shipping_detail(
        &self,
        user_no: i64,
        input: UpdateShippingInput,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
