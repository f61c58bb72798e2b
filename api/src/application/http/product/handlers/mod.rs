pub mod create_product;
pub mod get_products;
pub mod get_seller_product;
