use crate::domain::{
    common::{CommerceConfig, services::Service},
    jwt::services::TokenManager,
};
use crate::infrastructure::{
    crypto::Argon2Hasher,
    db::postgres::{Postgres, PostgresConfig},
    object_storage::S3ObjectStorage,
    order::repositories::PostgresOrderRepository,
    product::repositories::PostgresProductRepository,
    user::PostgresUserRepository,
};

pub type CommerceService = Service<
    PostgresOrderRepository,
    PostgresProductRepository,
    PostgresUserRepository,
    Argon2Hasher,
    S3ObjectStorage,
>;

/// Wires the concrete repositories and adapters into one service instance.
pub async fn create_service(config: CommerceConfig) -> Result<CommerceService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );

    let postgres = Postgres::new(PostgresConfig { database_url }).await?;
    let db = postgres.get_db();

    Ok(Service::new(
        PostgresOrderRepository::new(db.clone()),
        PostgresProductRepository::new(db.clone()),
        PostgresUserRepository::new(db),
        Argon2Hasher,
        S3ObjectStorage::new(config.object_storage.clone()).await,
        TokenManager::new(config.auth.clone()),
    ))
}
