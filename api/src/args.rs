use clap::Parser;
use commerce_core::domain::common::{
    AuthConfig, CommerceConfig, DatabaseConfig, ObjectStorageConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "commerce-api", about = "Commerce admin backend API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    /// Emit logs as JSON lines instead of the human-readable format.
    #[arg(long, env = "LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

#[derive(Debug, Clone, Parser)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api/v1`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Parser)]
pub struct DatabaseArgs {
    #[arg(long = "db-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(long = "db-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "db-user", env = "DATABASE_USER", default_value = "postgres")]
    pub username: String,

    #[arg(long = "db-password", env = "DATABASE_PASSWORD", default_value = "postgres")]
    pub password: String,

    #[arg(long = "db-name", env = "DATABASE_NAME", default_value = "commerce")]
    pub name: String,
}

#[derive(Debug, Clone, Parser)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub jwt_secret: String,

    /// Access-token lifetime in seconds.
    #[arg(long = "jwt-expiry-secs", env = "JWT_EXPIRY_SECS", default_value_t = 86_400)]
    pub jwt_expiry_secs: i64,
}

#[derive(Debug, Clone, Parser)]
pub struct StorageArgs {
    #[arg(long = "s3-endpoint", env = "S3_ENDPOINT")]
    pub endpoint: String,

    #[arg(long = "s3-region", env = "S3_REGION", default_value = "us-east-1")]
    pub region: String,

    #[arg(long = "s3-access-key", env = "S3_ACCESS_KEY")]
    pub access_key: String,

    #[arg(long = "s3-secret-key", env = "S3_SECRET_KEY")]
    pub secret_key: String,

    #[arg(long = "s3-bucket", env = "S3_BUCKET", default_value = "commerce")]
    pub bucket: String,
}

impl From<Args> for CommerceConfig {
    fn from(args: Args) -> Self {
        CommerceConfig {
            database: DatabaseConfig {
                host: args.database.host,
                port: args.database.port,
                username: args.database.username,
                password: args.database.password,
                name: args.database.name,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_expiry_secs: args.auth.jwt_expiry_secs,
            },
            object_storage: ObjectStorageConfig {
                endpoint: args.storage.endpoint,
                region: args.storage.region,
                access_key: args.storage.access_key,
                secret_key: args.storage.secret_key,
                bucket: args.storage.bucket,
            },
        }
    }
}
