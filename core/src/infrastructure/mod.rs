pub mod crypto;
pub mod db;
pub mod object_storage;
pub mod order;
pub mod product;
pub mod user;
