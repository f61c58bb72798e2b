use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, crypto::ports::HasherRepository};

/// Argon2id with per-password random salts, stored as PHC strings.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl HasherRepository for Argon2Hasher {
    fn hash_password(&self, plain: &str) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                CoreError::Internal("failed to hash password".to_string())
            })
    }

    fn verify_password(&self, plain: &str, hash: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            error!("Stored password hash is malformed: {}", e);
            CoreError::Internal("stored password hash is malformed".to_string())
        })?;

        Ok(Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hasher = Argon2Hasher;
        let hash = hasher.hash_password("hunter2").unwrap();

        assert!(hasher.verify_password("hunter2", &hash).unwrap());
        assert!(!hasher.verify_password("hunter3", &hash).unwrap());
    }

    #[test]
    fn salts_are_random() {
        let hasher = Argon2Hasher;
        assert_ne!(
            hasher.hash_password("same").unwrap(),
            hasher.hash_password("same").unwrap()
        );
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        let hasher = Argon2Hasher;
        assert!(hasher.verify_password("x", "12345678").is_err());
    }
}
