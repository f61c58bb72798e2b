use crate::domain::common::entities::app_errors::CoreError;

/// Salted cryptographic password hashing. Plain or reversible comparisons
/// are not an implementation option.
#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(&self, plain: &str) -> Result<String, CoreError>;

    /// `Ok(false)` is a mismatch; `Err` means the stored hash is unusable.
    fn verify_password(&self, plain: &str, hash: &str) -> Result<bool, CoreError>;
}
