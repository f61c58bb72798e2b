use crate::domain::{
    crypto::ports::HasherRepository, jwt::services::TokenManager, order::ports::OrderRepository,
    product::ports::ProductRepository, storage::ports::ObjectStoragePort,
    user::ports::UserRepository,
};

/// Aggregate service backing every `<Area>Service` trait.
///
/// One instance is built at startup and shared behind the HTTP state; each
/// request runs against a single repository call (or two sequential ones for
/// the paginated listing), with no shared mutable state of its own.
#[derive(Clone)]
pub struct Service<O, P, U, H, OS>
where
    O: OrderRepository,
    P: ProductRepository,
    U: UserRepository,
    H: HasherRepository,
    OS: ObjectStoragePort,
{
    pub order_repository: O,
    pub product_repository: P,
    pub user_repository: U,
    pub hasher: H,
    pub object_storage: OS,
    pub token_manager: TokenManager,
}

impl<O, P, U, H, OS> Service<O, P, U, H, OS>
where
    O: OrderRepository,
    P: ProductRepository,
    U: UserRepository,
    H: HasherRepository,
    OS: ObjectStoragePort,
{
    pub fn new(
        order_repository: O,
        product_repository: P,
        user_repository: U,
        hasher: H,
        object_storage: OS,
        token_manager: TokenManager,
    ) -> Self {
        Self {
            order_repository,
            product_repository,
            user_repository,
            hasher,
            object_storage,
            token_manager,
        }
    }
}
