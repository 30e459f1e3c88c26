use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::AccessClaims;
use super::errors::TokenError;

/// Signs and verifies access tokens.
///
/// Uses HS256 (HMAC with SHA-256) with a process-wide secret key held for
/// the lifetime of the issuer. Anyone holding the same secret can verify
/// the tokens it produces.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a new issuer from a secret key.
    ///
    /// The secret should be at least 256 bits (32 bytes) for HS256 and
    /// must come from configuration, never from code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        }
    }

    /// Sign a claim set into a token string.
    ///
    /// # Errors
    /// * `SigningFailed` - Token signing failed
    pub fn sign(&self, claims: &AccessClaims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - The `exp` claim is in the past
    /// * `InvalidToken` - Signature is invalid or the token is malformed
    pub fn verify(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let validation = Validation::new(self.algorithm);

        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    _ => TokenError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_sign_and_verify() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");

        let claims = AccessClaims::for_user("user123", "alice", Duration::hours(1));

        let token = issuer.sign(&claims).expect("Failed to sign token");
        assert!(!token.is_empty());

        let decoded = issuer.verify(&token).expect("Failed to verify token");
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_verify_garbage_token() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");

        let result = issuer.verify("invalid.token.here");
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer1 = TokenIssuer::new(b"secret1_at_least_32_bytes_long_key!");
        let issuer2 = TokenIssuer::new(b"secret2_at_least_32_bytes_long_key!");

        let claims = AccessClaims::for_user("user123", "alice", Duration::hours(1));
        let token = issuer1.sign(&claims).expect("Failed to sign token");

        let result = issuer2.verify(&token);
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_expired_token() {
        let issuer = TokenIssuer::new(b"my_secret_key_at_least_32_bytes_long!");

        // Expired an hour ago, well past any validation leeway.
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "user123".to_string(),
            username: "alice".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };

        let token = issuer.sign(&claims).expect("Failed to sign token");
        let result = issuer.verify(&token);
        assert!(matches!(result, Err(TokenError::TokenExpired)));
    }
}
