use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{OrdererInfo, User},
        ports::UserRepository,
        value_objects::UpdateShippingInput,
    },
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn get_user(
        &self,
        sql: &str,
        bind: sea_orm::Value,
        operation: &str,
    ) -> Result<Option<User>, CoreError> {
        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                sql,
                [bind],
            ))
            .await
            .map_err(|e| {
                error!("Failed to run {}: {}", operation, e);
                CoreError::query(operation)
            })?;

        row.map(|row| {
            let map = |e: sea_orm::DbErr| {
                error!("Failed to read column in {}: {}", operation, e);
                CoreError::query(operation)
            };

            Ok(User {
                user_no: row.try_get("", "user_no").map_err(map)?,
                name: row.try_get("", "name").map_err(map)?,
                email: row.try_get("", "email").map_err(map)?,
            })
        })
        .transpose()
    }
}

const GET_BY_EMAIL_SQL: &str = r#"
SELECT user_no, name, email
FROM users
WHERE email = $1 AND is_deleted = false
"#;

const GET_BY_ID_SQL: &str = r#"
SELECT user_no, name, email
FROM users
WHERE user_no = $1 AND is_deleted = false
"#;

const GET_PASSWORD_HASH_SQL: &str = r#"
SELECT password_hash
FROM users
WHERE user_no = $1 AND is_deleted = false
"#;

const TOUCH_LAST_ACCESS_SQL: &str = r#"
UPDATE users
SET last_access = now()
WHERE user_no = $1
"#;

const GET_ORDERER_INFO_SQL: &str = r#"
SELECT
    u.name AS orderer_name,
    u.email AS orderer_email,
    usd.receiver,
    usd.phone_number,
    usd.address,
    usd.additional_address,
    usd.zip_code

FROM users AS u

LEFT JOIN user_shipping_details AS usd
    ON u.user_no = usd.user_id

WHERE u.is_deleted = false
    AND u.user_no = $1
"#;

const UPDATE_SHIPPING_SQL: &str = r#"
UPDATE user_shipping_details
SET receiver = $2,
    phone_number = $3,
    address = $4,
    additional_address = $5,
    zip_code = $6
WHERE user_id = $1
"#;

impl UserRepository for PostgresUserRepository {
    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        self.get_user(GET_BY_EMAIL_SQL, email.into(), "get_user_by_email")
            .await
    }

    async fn get_by_id(&self, user_no: i64) -> Result<Option<User>, CoreError> {
        self.get_user(GET_BY_ID_SQL, user_no.into(), "get_user_by_id")
            .await
    }

    async fn get_password_hash(&self, user_no: i64) -> Result<Option<String>, CoreError> {
        const OPERATION: &str = "get_password_hash";

        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                GET_PASSWORD_HASH_SQL,
                [user_no.into()],
            ))
            .await
            .map_err(|e| {
                error!("Failed to get password hash: {}", e);
                CoreError::query(OPERATION)
            })?;

        row.map(|row| {
            row.try_get::<String>("", "password_hash").map_err(|e| {
                error!("Failed to read password_hash: {}", e);
                CoreError::query(OPERATION)
            })
        })
        .transpose()
    }

    async fn touch_last_access(&self, user_no: i64) -> Result<(), CoreError> {
        self.db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                TOUCH_LAST_ACCESS_SQL,
                [user_no.into()],
            ))
            .await
            .map_err(|e| {
                error!("Failed to update last access: {}", e);
                CoreError::query("touch_last_access")
            })?;

        Ok(())
    }

    async fn get_orderer_info(&self, user_no: i64) -> Result<Option<OrdererInfo>, CoreError> {
        const OPERATION: &str = "get_orderer_info";

        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                GET_ORDERER_INFO_SQL,
                [user_no.into()],
            ))
            .await
            .map_err(|e| {
                error!("Failed to get orderer info: {}", e);
                CoreError::query(OPERATION)
            })?;

        row.map(|row| {
            let map = |e: sea_orm::DbErr| {
                error!("Failed to read column in {}: {}", OPERATION, e);
                CoreError::query(OPERATION)
            };

            Ok(OrdererInfo {
                orderer_name: row.try_get("", "orderer_name").map_err(map)?,
                orderer_email: row.try_get("", "orderer_email").map_err(map)?,
                receiver: row.try_get("", "receiver").map_err(map)?,
                phone_number: row.try_get("", "phone_number").map_err(map)?,
                address: row.try_get("", "address").map_err(map)?,
                additional_address: row.try_get("", "additional_address").map_err(map)?,
                zip_code: row.try_get("", "zip_code").map_err(map)?,
            })
        })
        .transpose()
    }

    async fn update_shipping_detail(
        &self,
        user_no: i64,
        input: UpdateShippingInput,
    ) -> Result<u64, CoreError> {
        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                UPDATE_SHIPPING_SQL,
                [
                    user_no.into(),
                    input.receiver.into(),
                    input.phone_number.into(),
                    input.address.into(),
                    input.additional_address.into(),
                    input.zip_code.into(),
                ],
            ))
            .await
            .map_err(|e| {
                error!("Failed to update shipping detail: {}", e);
                CoreError::query("update_shipping_detail")
            })?;

        Ok(result.rows_affected())
    }
}
