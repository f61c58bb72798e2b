use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement, TransactionTrait,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    order::value_objects::DATE_CEILING,
    product::{
        entities::{CreatedProduct, ProductImageUrls, ProductSummary, SellerProductInfo},
        ports::ProductRepository,
        value_objects::{CreateProductInput, SellerProductKey, StoredImageSet},
    },
};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

const INSERT_PRODUCT_SQL: &str = r#"
INSERT INTO products (created_at, is_deleted)
VALUES (DEFAULT, DEFAULT)
RETURNING product_no
"#;

const INSERT_PRODUCT_DETAIL_SQL: &str = r#"
INSERT INTO product_details (
    product_id,
    is_activated,
    is_displayed,
    main_category_id,
    sub_category_id,
    name,
    simple_description,
    detail_information,
    price,
    discount_rate,
    discount_start_date,
    discount_end_date,
    min_sales_quantity,
    max_sales_quantity
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
RETURNING product_detail_no
"#;

const INSERT_IMAGE_SQL: &str = r#"
INSERT INTO images (image_large, image_medium, image_small, is_deleted)
VALUES ($1, $2, $3, false)
RETURNING image_no
"#;

fn insert_product_image_sql() -> String {
    format!(
        "INSERT INTO product_images (product_id, image_id, is_main, start_time, close_time)\n\
         VALUES ($1, $2, $3, now(), '{DATE_CEILING}')"
    )
}

fn list_products_sql() -> String {
    format!(
        r#"
SELECT
    p.product_no,
    i.image_medium AS thumbnail_image,
    pd.name AS product_name,
    pd.price,
    pd.discount_rate

FROM products AS p

LEFT JOIN product_images AS pi
    ON p.product_no = pi.product_id

LEFT JOIN images AS i
    ON pi.image_id = i.image_no

LEFT JOIN product_details AS pd
    ON p.product_no = pd.product_id

WHERE p.is_deleted = false
    AND pi.is_main = true
    AND pi.close_time = '{DATE_CEILING}'
    AND i.is_deleted = false
    AND pd.is_activated = true
    AND pd.is_displayed = true
    AND pd.close_time = '{DATE_CEILING}'
"#
    )
}

fn seller_product_sql() -> String {
    format!(
        r#"
SELECT
    p.product_no,
    c.name AS color_name,
    s.name AS size_name,
    pd.name,
    pd.discount_rate,
    pd.price,
    i.image_small

FROM products AS p

LEFT JOIN product_details AS pd
    ON p.product_no = pd.product_id
    AND pd.is_activated = true
    AND pd.is_displayed = true
    AND pd.close_time = '{DATE_CEILING}'

LEFT JOIN product_images AS pi
    ON p.product_no = pi.product_id
    AND pi.is_main = true
    AND pi.close_time = '{DATE_CEILING}'

LEFT JOIN images AS i
    ON pi.image_id = i.image_no
    AND i.is_deleted = false

LEFT JOIN product_options AS po
    ON p.product_no = po.product_id
    AND po.is_deleted = false

LEFT JOIN option_details AS opt
    ON po.product_option_no = opt.product_option_id
    AND opt.close_time = '{DATE_CEILING}'

LEFT JOIN colors AS c
    ON opt.color_id = c.color_no

LEFT JOIN sizes AS s
    ON opt.size_id = s.size_no

WHERE p.is_deleted = false
    AND p.product_no = $1
    AND c.color_no = $2
    AND s.size_no = $3
"#
    )
}

impl ProductRepository for PostgresProductRepository {
    async fn insert_product_with_detail(
        &self,
        input: CreateProductInput,
        images: Vec<StoredImageSet>,
    ) -> Result<CreatedProduct, CoreError> {
        const OPERATION: &str = "insert_product_with_detail";

        let map = |context: &str| {
            let context = context.to_string();
            move |e: sea_orm::DbErr| {
                error!("Failed to {}: {}", context, e);
                CoreError::query(OPERATION)
            }
        };

        // One transaction for the whole insert: a failure on the detail or
        // image rows must not leave an orphaned product row behind.
        let txn = self.db.begin().await.map_err(map("begin transaction"))?;

        let product_no = txn
            .query_one(Statement::from_string(
                DatabaseBackend::Postgres,
                INSERT_PRODUCT_SQL,
            ))
            .await
            .map_err(map("insert product"))?
            .ok_or_else(|| CoreError::query(OPERATION))?
            .try_get::<i64>("", "product_no")
            .map_err(map("read product_no"))?;

        let product_detail_no = txn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                INSERT_PRODUCT_DETAIL_SQL,
                [
                    product_no.into(),
                    input.sell.into(),
                    input.exhibition.into(),
                    input.main_category_no.into(),
                    input.sub_category_no.into(),
                    input.name.into(),
                    input.simple_description.into(),
                    input.detail_information.into(),
                    input.price.into(),
                    input.discount_rate.into(),
                    input.discount_start.into(),
                    input.discount_end.into(),
                    input.min_sales_quantity.into(),
                    input.max_sales_quantity.into(),
                ],
            ))
            .await
            .map_err(map("insert product detail"))?
            .ok_or_else(|| CoreError::query(OPERATION))?
            .try_get::<i64>("", "product_detail_no")
            .map_err(map("read product_detail_no"))?;

        for image in &images {
            let image_no = txn
                .query_one(Statement::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    INSERT_IMAGE_SQL,
                    [
                        image.large_url.clone().into(),
                        image.medium_url.clone().into(),
                        image.small_url.clone().into(),
                    ],
                ))
                .await
                .map_err(map("insert image"))?
                .ok_or_else(|| CoreError::query(OPERATION))?
                .try_get::<i64>("", "image_no")
                .map_err(map("read image_no"))?;

            txn.execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                insert_product_image_sql(),
                [product_no.into(), image_no.into(), image.is_main.into()],
            ))
            .await
            .map_err(map("insert product image"))?;
        }

        txn.commit().await.map_err(map("commit transaction"))?;

        Ok(CreatedProduct {
            product_no,
            product_detail_no,
            images: images.iter().map(ProductImageUrls::from).collect(),
        })
    }

    async fn list_products(&self) -> Result<Vec<ProductSummary>, CoreError> {
        const OPERATION: &str = "list_products";

        let rows = self
            .db
            .query_all(Statement::from_string(
                DatabaseBackend::Postgres,
                list_products_sql(),
            ))
            .await
            .map_err(|e| {
                error!("Failed to list products: {}", e);
                CoreError::query(OPERATION)
            })?;

        rows.iter()
            .map(|row| {
                let map = |e: sea_orm::DbErr| {
                    error!("Failed to read column in {}: {}", OPERATION, e);
                    CoreError::query(OPERATION)
                };

                Ok(ProductSummary {
                    product_no: row.try_get("", "product_no").map_err(map)?,
                    thumbnail_image: row.try_get("", "thumbnail_image").map_err(map)?,
                    product_name: row.try_get("", "product_name").map_err(map)?,
                    price: row.try_get("", "price").map_err(map)?,
                    discount_rate: row.try_get("", "discount_rate").map_err(map)?,
                })
            })
            .collect()
    }

    async fn get_seller_product(
        &self,
        key: SellerProductKey,
    ) -> Result<Option<SellerProductInfo>, CoreError> {
        const OPERATION: &str = "get_seller_product";

        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                seller_product_sql(),
                [
                    key.product_no.into(),
                    key.color_no.into(),
                    key.size_no.into(),
                ],
            ))
            .await
            .map_err(|e| {
                error!("Failed to get seller product: {}", e);
                CoreError::query(OPERATION)
            })?;

        let Some(row) = row else {
            return Ok(None);
        };

        let map = |e: sea_orm::DbErr| {
            error!("Failed to read column in {}: {}", OPERATION, e);
            CoreError::query(OPERATION)
        };

        // The detail row joins on a validity sentinel; a product with no
        // currently-effective detail is treated as absent.
        let name: Option<String> = row.try_get("", "name").map_err(map)?;
        let price: Option<i64> = row.try_get("", "price").map_err(map)?;
        let (Some(name), Some(price)) = (name, price) else {
            return Ok(None);
        };

        Ok(Some(SellerProductInfo {
            product_no: row.try_get("", "product_no").map_err(map)?,
            color_name: row.try_get("", "color_name").map_err(map)?,
            size_name: row.try_get("", "size_name").map_err(map)?,
            name,
            discount_rate: row.try_get("", "discount_rate").map_err(map)?,
            price,
            image_small: row.try_get("", "image_small").map_err(map)?,
        }))
    }
}
