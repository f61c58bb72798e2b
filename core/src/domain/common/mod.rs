pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct CommerceConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub object_storage: ObjectStorageConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiry_secs: i64,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
}
