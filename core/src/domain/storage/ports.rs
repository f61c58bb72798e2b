use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

/// Object storage for the resized product images.
#[cfg_attr(test, mockall::automock)]
pub trait ObjectStoragePort: Send + Sync {
    /// Uploads the payload under `object_key` and returns its public URL.
    fn put_object(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn delete_object(&self, object_key: &str)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}
