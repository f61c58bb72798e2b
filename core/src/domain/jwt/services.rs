use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::domain::{
    common::{AuthConfig, entities::app_errors::CoreError},
    jwt::entities::JwtClaim,
};

/// Issues and verifies HS256 access tokens.
///
/// The signing key and expiry are injected at construction; nothing reads
/// secrets from ambient state.
#[derive(Clone)]
pub struct TokenManager {
    config: AuthConfig,
}

impl TokenManager {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn issue(&self, user_no: i64) -> Result<String, CoreError> {
        let now = Utc::now().timestamp();
        let claim = JwtClaim {
            sub: user_no,
            iat: now,
            exp: now + self.config.jwt_expiry_secs,
        };

        encode(
            &Header::default(),
            &claim,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| CoreError::Internal(format!("failed to sign access token: {e}")))
    }

    pub fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        decode::<JwtClaim>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| CoreError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(expiry_secs: i64) -> TokenManager {
        TokenManager::new(AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_expiry_secs: expiry_secs,
        })
    }

    #[test]
    fn issued_token_round_trips() {
        let manager = manager(3600);
        let token = manager.issue(42).unwrap();
        let claim = manager.verify(&token).unwrap();

        assert_eq!(claim.sub, 42);
        assert_eq!(claim.exp - claim.iat, 3600);
    }

    #[test]
    fn rejects_wrong_key() {
        let token = manager(3600).issue(1).unwrap();

        let other = TokenManager::new(AuthConfig {
            jwt_secret: "another-secret".to_string(),
            jwt_expiry_secs: 3600,
        });

        assert_eq!(other.verify(&token), Err(CoreError::Unauthorized));
    }

    #[test]
    fn rejects_expired_token() {
        let manager = manager(-3600);
        let token = manager.issue(1).unwrap();

        assert_eq!(manager.verify(&token), Err(CoreError::Unauthorized));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            manager(3600).verify("not.a.token"),
            Err(CoreError::Unauthorized)
        );
    }
}
