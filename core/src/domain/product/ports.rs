use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::{CreatedProduct, ProductSummary, SellerProductInfo},
        value_objects::{CreateProductInput, ProductImageUpload, SellerProductKey, StoredImageSet},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductService: Send + Sync {
    /// Resizes and uploads the given images, then inserts the product, its
    /// localized detail row and the image rows in one transaction.
    fn create_product(
        &self,
        input: CreateProductInput,
        images: Vec<ProductImageUpload>,
    ) -> impl Future<Output = Result<CreatedProduct, CoreError>> + Send;

    fn list_products(&self)
    -> impl Future<Output = Result<Vec<ProductSummary>, CoreError>> + Send;

    fn get_seller_product(
        &self,
        key: SellerProductKey,
    ) -> impl Future<Output = Result<SellerProductInfo, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Inserts `products`, `product_details` and the image rows atomically;
    /// a failure on any statement rolls back the whole product.
    fn insert_product_with_detail(
        &self,
        input: CreateProductInput,
        images: Vec<StoredImageSet>,
    ) -> impl Future<Output = Result<CreatedProduct, CoreError>> + Send;

    fn list_products(&self)
    -> impl Future<Output = Result<Vec<ProductSummary>, CoreError>> + Send;

    fn get_seller_product(
        &self,
        key: SellerProductKey,
    ) -> impl Future<Output = Result<Option<SellerProductInfo>, CoreError>> + Send;
}
