pub mod common;
pub mod crypto;
pub mod jwt;
pub mod media;
pub mod order;
pub mod product;
pub mod storage;
pub mod user;
