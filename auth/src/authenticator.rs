use crate::jwt::AccessClaims;
use crate::jwt::TokenError;
use crate::jwt::TokenIssuer;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator signing with `token_secret`.
    pub fn new(token_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(token_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// Verification only succeeds against hashes produced by this scheme,
    /// so provisioning tooling and tests must create credentials through
    /// this method.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash and issue a signed token.
    ///
    /// Verification is constant-effort in the password: the full Argon2id
    /// computation runs before the comparison resolves, never a string
    /// compare against the stored value.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `Password` - Stored hash is malformed or verification faulted
    /// * `Token` - Signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &AccessClaims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.sign(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Verify and decode an access token.
    ///
    /// # Errors
    /// * `TokenExpired` - The token's expiry is in the past
    /// * `InvalidToken` - Signature is invalid or the token is malformed
    pub fn verify_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        self.token_issuer.verify(token)
    }
}
