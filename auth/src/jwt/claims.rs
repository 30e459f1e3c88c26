use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// Binds the token to the authenticated user's identity: `sub` holds the
/// user id, `username` the login name, and `exp` is always `iat + ttl`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Login name of the authenticated user
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl AccessClaims {
    /// Create claims for an authenticated user, expiring `ttl` after now.
    pub fn for_user(user_id: impl ToString, username: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: user_id.to_string(),
            username: username.into(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }

    /// Seconds of validity encoded in the claim set.
    pub fn ttl_seconds(&self) -> i64 {
        self.exp - self.iat
    }
}
