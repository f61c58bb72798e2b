pub mod health;
pub mod order;
pub mod product;
pub mod server;
pub mod user;
