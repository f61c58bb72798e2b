use serde::{Deserialize, Serialize};

/// Access-token claims. `sub` is the user number; expiry is mandatory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JwtClaim {
    pub sub: i64,
    pub iat: i64,
    pub exp: i64,
}
