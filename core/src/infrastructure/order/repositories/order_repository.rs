use chrono::NaiveDateTime;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryResult, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    order::{
        entities::{CompletedOrderRow, OrderDetailRow},
        ports::OrderRepository,
        value_objects::CompletedOrderQuery,
    },
};
use crate::infrastructure::order::query::{
    ORDER_DETAIL_SQL, completed_orders_count_sql, completed_orders_sql, filter_binds, page_binds,
    user_filter_binds, user_orders_count_sql, user_orders_sql, user_page_binds,
};

#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pub db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn completed_row(row: &QueryResult, operation: &str) -> Result<CompletedOrderRow, CoreError> {
    let map = |e: sea_orm::DbErr| {
        error!("Failed to read column in {}: {}", operation, e);
        CoreError::query(operation)
    };

    Ok(CompletedOrderRow {
        order_time: row.try_get::<NaiveDateTime>("", "order_time").map_err(map)?,
        order_no: row.try_get("", "order_no").map_err(map)?,
        order_item_no: row.try_get("", "order_item_no").map_err(map)?,
        product_name: row.try_get("", "product_name").map_err(map)?,
        size: row.try_get("", "size").map_err(map)?,
        color: row.try_get("", "color").map_err(map)?,
        price: row.try_get("", "price").map_err(map)?,
        quantity: row.try_get("", "quantity").map_err(map)?,
        user_name: row.try_get("", "user_name").map_err(map)?,
        phone_number: row.try_get("", "phone_number").map_err(map)?,
        order_status: row.try_get("", "order_status").map_err(map)?,
    })
}

fn detail_row(row: &QueryResult, operation: &str) -> Result<OrderDetailRow, CoreError> {
    let map = |e: sea_orm::DbErr| {
        error!("Failed to read column in {}: {}", operation, e);
        CoreError::query(operation)
    };

    Ok(OrderDetailRow {
        order_no: row.try_get("", "order_no").map_err(map)?,
        order_time: row.try_get::<NaiveDateTime>("", "order_time").map_err(map)?,
        order_item_no: row.try_get("", "order_item_no").map_err(map)?,
        paid_time: row.try_get::<NaiveDateTime>("", "paid_time").map_err(map)?,
        order_status: row.try_get("", "order_status").map_err(map)?,
        orderer: row.try_get("", "orderer").map_err(map)?,
        phone_number: row.try_get("", "phone_number").map_err(map)?,
        product_no: row.try_get("", "product_no").map_err(map)?,
        product_name: row.try_get("", "product_name").map_err(map)?,
        price: row.try_get("", "price").map_err(map)?,
        color: row.try_get("", "color").map_err(map)?,
        size: row.try_get("", "size").map_err(map)?,
        quantity: row.try_get("", "quantity").map_err(map)?,
        user_no: row.try_get("", "user_no").map_err(map)?,
        receiver: row.try_get("", "receiver").map_err(map)?,
        address: row.try_get("", "address").map_err(map)?,
        delivery_request: row.try_get("", "delivery_request").map_err(map)?,
    })
}

impl OrderRepository for PostgresOrderRepository {
    async fn fetch_completed_orders(
        &self,
        query: CompletedOrderQuery,
    ) -> Result<Vec<CompletedOrderRow>, CoreError> {
        const OPERATION: &str = "fetch_completed_orders";

        let statement = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            completed_orders_sql(query.sort),
            page_binds(&query),
        );

        let rows = self.db.query_all(statement).await.map_err(|e| {
            error!("Failed to fetch completed orders: {}", e);
            CoreError::query(OPERATION)
        })?;

        rows.iter().map(|row| completed_row(row, OPERATION)).collect()
    }

    async fn count_completed_orders(
        &self,
        query: CompletedOrderQuery,
    ) -> Result<i64, CoreError> {
        const OPERATION: &str = "count_completed_orders";

        let statement = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            completed_orders_count_sql(),
            filter_binds(&query),
        );

        let row = self.db.query_one(statement).await.map_err(|e| {
            error!("Failed to count completed orders: {}", e);
            CoreError::query(OPERATION)
        })?;

        row.map(|row| {
            row.try_get::<i64>("", "total_count").map_err(|e| {
                error!("Failed to read total_count: {}", e);
                CoreError::query(OPERATION)
            })
        })
        .unwrap_or(Ok(0))
    }

    async fn get_order_detail(
        &self,
        order_item_no: i64,
    ) -> Result<Option<OrderDetailRow>, CoreError> {
        const OPERATION: &str = "get_order_detail";

        let statement = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            ORDER_DETAIL_SQL,
            [order_item_no.into()],
        );

        let row = self.db.query_one(statement).await.map_err(|e| {
            error!("Failed to get order detail: {}", e);
            CoreError::query(OPERATION)
        })?;

        row.map(|row| detail_row(&row, OPERATION)).transpose()
    }

    async fn fetch_user_orders(
        &self,
        user_no: i64,
        query: CompletedOrderQuery,
    ) -> Result<Vec<CompletedOrderRow>, CoreError> {
        const OPERATION: &str = "fetch_user_orders";

        let statement = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            user_orders_sql(),
            user_page_binds(&query, user_no),
        );

        let rows = self.db.query_all(statement).await.map_err(|e| {
            error!("Failed to fetch user orders: {}", e);
            CoreError::query(OPERATION)
        })?;

        rows.iter().map(|row| completed_row(row, OPERATION)).collect()
    }

    async fn count_user_orders(
        &self,
        user_no: i64,
        query: CompletedOrderQuery,
    ) -> Result<i64, CoreError> {
        const OPERATION: &str = "count_user_orders";

        let statement = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            user_orders_count_sql(),
            user_filter_binds(&query, user_no),
        );

        let row = self.db.query_one(statement).await.map_err(|e| {
            error!("Failed to count user orders: {}", e);
            CoreError::query(OPERATION)
        })?;

        row.map(|row| {
            row.try_get::<i64>("", "total_count").map_err(|e| {
                error!("Failed to read total_count: {}", e);
                CoreError::query(OPERATION)
            })
        })
        .unwrap_or(Ok(0))
    }
}
