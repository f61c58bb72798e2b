use tracing::info;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    order::ports::OrderRepository,
    product::ports::ProductRepository,
    storage::ports::ObjectStoragePort,
    user::{
        entities::{OrdererInfo, SignedInUser},
        ports::{UserRepository, UserService},
        value_objects::{SignInInput, UpdateShippingInput},
    },
};

impl<O, P, U, H, OS> UserService for Service<O, P, U, H, OS>
where
    O: OrderRepository,
    P: ProductRepository,
    U: UserRepository,
    H: HasherRepository,
    OS: ObjectStoragePort,
{
    async fn sign_in(&self, input: SignInInput) -> Result<SignedInUser, CoreError> {
        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        let hash = self
            .user_repository
            .get_password_hash(user.user_no)
            .await?
            .ok_or(CoreError::Unauthorized)?;

        if !self.hasher.verify_password(&input.password, &hash)? {
            return Err(CoreError::Unauthorized);
        }

        self.user_repository.touch_last_access(user.user_no).await?;

        let access_token = self.token_manager.issue(user.user_no)?;

        info!(user_no = user.user_no, "User signed in");

        Ok(SignedInUser { user, access_token })
    }

    async fn get_orderer_info(&self, user_no: i64) -> Result<OrdererInfo, CoreError> {
        self.user_repository
            .get_orderer_info(user_no)
            .await?
            .ok_or(CoreError::Unauthorized)
    }

    async fn update_shipping_detail(
        &self,
        user_no: i64,
        input: UpdateShippingInput,
    ) -> Result<(), CoreError> {
        self.user_repository
            .get_by_id(user_no)
            .await?
            .ok_or(CoreError::NotFound)?;

        let updated = self
            .user_repository
            .update_shipping_detail(user_no, input)
            .await?;

        if updated == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::AuthConfig,
        crypto::ports::MockHasherRepository,
        jwt::services::TokenManager,
        order::ports::MockOrderRepository,
        product::ports::MockProductRepository,
        storage::ports::MockObjectStoragePort,
        user::entities::User,
    };
    use crate::domain::user::ports::MockUserRepository;

    type TestService = Service<
        MockOrderRepository,
        MockProductRepository,
        MockUserRepository,
        MockHasherRepository,
        MockObjectStoragePort,
    >;

    fn service(user_repository: MockUserRepository, hasher: MockHasherRepository) -> TestService {
        Service::new(
            MockOrderRepository::new(),
            MockProductRepository::new(),
            user_repository,
            hasher,
            MockObjectStoragePort::new(),
            TokenManager::new(AuthConfig {
                jwt_secret: "test-secret".to_string(),
                jwt_expiry_secs: 3600,
            }),
        )
    }

    fn user() -> User {
        User {
            user_no: 7,
            name: "Kim".to_string(),
            email: "kim@example.com".to_string(),
        }
    }

    fn sign_in_input() -> SignInInput {
        SignInInput {
            email: "kim@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_in_issues_a_token() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(user())) }));
        repo.expect_get_password_hash()
            .returning(|_| Box::pin(async { Ok(Some("$argon2id$stored".to_string())) }));
        repo.expect_touch_last_access()
            .returning(|_| Box::pin(async { Ok(()) }));

        let mut hasher = MockHasherRepository::new();
        hasher.expect_verify_password().returning(|_, _| Ok(true));

        let signed_in = service(repo, hasher).sign_in(sign_in_input()).await.unwrap();

        assert_eq!(signed_in.user, user());
        assert!(!signed_in.access_token.is_empty());
    }

    #[tokio::test]
    async fn unknown_email_is_unauthorized() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));
        repo.expect_touch_last_access().never();

        let result = service(repo, MockHasherRepository::new())
            .sign_in(sign_in_input())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::Unauthorized);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(user())) }));
        repo.expect_get_password_hash()
            .returning(|_| Box::pin(async { Ok(Some("$argon2id$stored".to_string())) }));
        repo.expect_touch_last_access().never();

        let mut hasher = MockHasherRepository::new();
        hasher.expect_verify_password().returning(|_, _| Ok(false));

        let result = service(repo, hasher).sign_in(sign_in_input()).await;

        assert_eq!(result.unwrap_err(), CoreError::Unauthorized);
    }

    #[tokio::test]
    async fn missing_password_hash_is_unauthorized() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(Some(user())) }));
        repo.expect_get_password_hash()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(repo, MockHasherRepository::new())
            .sign_in(sign_in_input())
            .await;

        assert_eq!(result.unwrap_err(), CoreError::Unauthorized);
    }

    #[tokio::test]
    async fn shipping_update_without_a_row_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .returning(|_| Box::pin(async { Ok(Some(user())) }));
        repo.expect_update_shipping_detail()
            .returning(|_, _| Box::pin(async { Ok(0) }));

        let input = UpdateShippingInput {
            receiver: "Kim".to_string(),
            phone_number: "010-1234-5678".to_string(),
            address: "1 Main St".to_string(),
            additional_address: None,
            zip_code: "04524".to_string(),
        };

        let result = service(repo, MockHasherRepository::new())
            .update_shipping_detail(7, input)
            .await;

        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }
}
