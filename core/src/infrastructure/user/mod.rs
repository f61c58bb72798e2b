pub mod repository;

pub use repository::PostgresUserRepository;
