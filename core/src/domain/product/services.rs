use tracing::info;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    media::services::resize_product_image,
    order::ports::OrderRepository,
    product::{
        entities::{CreatedProduct, ProductImageUrls, ProductSummary, SellerProductInfo},
        ports::{ProductRepository, ProductService},
        value_objects::{CreateProductInput, ProductImageUpload, SellerProductKey, StoredImageSet},
    },
    storage::ports::ObjectStoragePort,
    user::ports::UserRepository,
};

pub const MAX_PRODUCT_IMAGES: usize = 5;

impl<O, P, U, H, OS> ProductService for Service<O, P, U, H, OS>
where
    O: OrderRepository,
    P: ProductRepository,
    U: UserRepository,
    H: HasherRepository,
    OS: ObjectStoragePort,
{
    async fn create_product(
        &self,
        input: CreateProductInput,
        images: Vec<ProductImageUpload>,
    ) -> Result<CreatedProduct, CoreError> {
        if images.is_empty() || images.len() > MAX_PRODUCT_IMAGES {
            return Err(CoreError::validation("product_image"));
        }

        let mut stored = Vec::with_capacity(images.len());

        for (index, upload) in images.into_iter().enumerate() {
            let resized = resize_product_image(&upload.field_name, &upload.data)?;
            let key_prefix = format!("products/{}", Uuid::new_v4());

            let large_url = self
                .object_storage
                .put_object(
                    &format!("{key_prefix}/{}_large.jpg", upload.field_name),
                    resized.large.data,
                    "image/jpeg",
                )
                .await?;
            let medium_url = self
                .object_storage
                .put_object(
                    &format!("{key_prefix}/{}_medium.jpg", upload.field_name),
                    resized.medium.data,
                    "image/jpeg",
                )
                .await?;
            let small_url = self
                .object_storage
                .put_object(
                    &format!("{key_prefix}/{}_small.jpg", upload.field_name),
                    resized.small.data,
                    "image/jpeg",
                )
                .await?;

            stored.push(StoredImageSet {
                field_name: upload.field_name,
                large_url,
                medium_url,
                small_url,
                is_main: index == 0,
            });
        }

        let created = self
            .product_repository
            .insert_product_with_detail(input, stored)
            .await?;

        info!(
            product_no = created.product_no,
            images = created.images.len(),
            "Product created"
        );

        Ok(created)
    }

    async fn list_products(&self) -> Result<Vec<ProductSummary>, CoreError> {
        self.product_repository.list_products().await
    }

    async fn get_seller_product(
        &self,
        key: SellerProductKey,
    ) -> Result<SellerProductInfo, CoreError> {
        self.product_repository
            .get_seller_product(key)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

impl From<&StoredImageSet> for ProductImageUrls {
    fn from(set: &StoredImageSet) -> Self {
        Self {
            field_name: set.field_name.clone(),
            large: set.large_url.clone(),
            medium: set.medium_url.clone(),
            small: set.small_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        common::AuthConfig,
        crypto::ports::MockHasherRepository,
        jwt::services::TokenManager,
        order::ports::MockOrderRepository,
        product::ports::MockProductRepository,
        storage::ports::MockObjectStoragePort,
        user::ports::MockUserRepository,
    };

    type TestService = Service<
        MockOrderRepository,
        MockProductRepository,
        MockUserRepository,
        MockHasherRepository,
        MockObjectStoragePort,
    >;

    fn service(
        product_repository: MockProductRepository,
        object_storage: MockObjectStoragePort,
    ) -> TestService {
        Service::new(
            MockOrderRepository::new(),
            product_repository,
            MockUserRepository::new(),
            MockHasherRepository::new(),
            object_storage,
            TokenManager::new(AuthConfig {
                jwt_secret: "test-secret".to_string(),
                jwt_expiry_secs: 3600,
            }),
        )
    }

    fn input() -> CreateProductInput {
        CreateProductInput {
            sell: true,
            exhibition: true,
            main_category_no: 1,
            sub_category_no: 2,
            name: "Linen shirt".to_string(),
            simple_description: None,
            detail_information: "A shirt.".to_string(),
            price: 25000,
            discount_rate: None,
            discount_start: None,
            discount_end: None,
            min_sales_quantity: 1,
            max_sales_quantity: 20,
        }
    }

    #[tokio::test]
    async fn rejects_a_product_without_images() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert_product_with_detail().never();

        let result = service(repo, MockObjectStoragePort::new())
            .create_product(input(), vec![])
            .await;

        assert_eq!(result.unwrap_err(), CoreError::validation("product_image"));
    }

    #[tokio::test]
    async fn rejects_too_many_images() {
        let uploads = (1..=MAX_PRODUCT_IMAGES + 1)
            .map(|i| ProductImageUpload {
                field_name: format!("product_image_{i}"),
                data: Bytes::from_static(&[0u8; 4]),
            })
            .collect();

        let result = service(MockProductRepository::new(), MockObjectStoragePort::new())
            .create_product(input(), uploads)
            .await;

        assert_eq!(result.unwrap_err(), CoreError::validation("product_image"));
    }

    #[tokio::test]
    async fn undecodable_image_fails_before_any_upload() {
        let mut storage = MockObjectStoragePort::new();
        storage.expect_put_object().never();

        let uploads = vec![ProductImageUpload {
            field_name: "product_image_1".to_string(),
            data: Bytes::from_static(b"not an image"),
        }];

        let result = service(MockProductRepository::new(), storage)
            .create_product(input(), uploads)
            .await;

        assert!(matches!(result, Err(CoreError::InvalidImage(_))));
    }

    #[tokio::test]
    async fn missing_seller_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_get_seller_product()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = service(repo, MockObjectStoragePort::new())
            .get_seller_product(SellerProductKey {
                product_no: 1,
                color_no: 2,
                size_no: 3,
            })
            .await;

        assert_eq!(result.unwrap_err(), CoreError::NotFound);
    }
}
