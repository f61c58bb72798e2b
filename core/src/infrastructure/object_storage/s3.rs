use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::ports::ObjectStoragePort,
};

/// S3-compatible object storage (MinIO in development, S3 in production).
#[derive(Clone)]
pub struct S3ObjectStorage {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStorage {
    pub async fn new(config: ObjectStorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "commerce",
        );

        let endpoint = config.endpoint.trim_end_matches('/').to_string();

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            "Initializing object storage client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(&endpoint)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            public_base_url: format!("{}/{}", endpoint, config.bucket),
            bucket: config.bucket,
        }
    }
}

impl ObjectStoragePort for S3ObjectStorage {
    #[instrument(skip(self, payload))]
    async fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<String, CoreError> {
        let payload_size = payload.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type(content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    payload_size = payload_size,
                    "Failed to upload object"
                );
                CoreError::ObjectStorage(format!("failed to upload object: {e}"))
            })?;

        tracing::info!(
            bucket = %self.bucket,
            object_key = %object_key,
            size = payload_size,
            "Object uploaded"
        );

        Ok(format!("{}/{}", self.public_base_url, object_key))
    }

    #[instrument(skip(self))]
    async fn delete_object(&self, object_key: &str) -> Result<(), CoreError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(object_key)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    bucket = %self.bucket,
                    object_key = %object_key,
                    "Failed to delete object"
                );
                CoreError::ObjectStorage(format!("failed to delete object: {e}"))
            })?;

        Ok(())
    }
}
