use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessClaims;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Duration;

use crate::login::errors::AuthError;
use crate::login::models::AuthenticatedUser;
use crate::login::models::LoginRequest;
use crate::login::ports::CredentialStore;
use crate::login::ports::LoginServicePort;

/// Access token lifetime. Part of the token contract, not configuration.
const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Domain service implementing the authentication sequence.
///
/// Stateless between calls: each invocation runs
/// validate -> lookup -> verify -> issue and terminates at the first
/// failure. No step is retried.
pub struct LoginService<CS>
where
    CS: CredentialStore,
{
    store: Arc<CS>,
    authenticator: Arc<Authenticator>,
}

impl<CS> LoginService<CS>
where
    CS: CredentialStore,
{
    /// Create a new login service with injected dependencies.
    ///
    /// # Arguments
    /// * `store` - Credential persistence implementation
    /// * `authenticator` - Password verification and token signing
    pub fn new(store: Arc<CS>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            store,
            authenticator,
        }
    }
}

#[async_trait]
impl<CS> LoginServicePort for LoginService<CS>
where
    CS: CredentialStore,
{
    async fn authenticate(&self, request: LoginRequest) -> Result<AuthenticatedUser, AuthError> {
        if request.username.is_empty() || request.password.is_empty() {
            return Err(AuthError::MalformedRequest);
        }

        let credential = self
            .store
            .find_by_username(&request.username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let claims = AccessClaims::for_user(
            credential.id,
            credential.username.as_str(),
            Duration::seconds(TOKEN_TTL_SECS),
        );

        // Argon2id verification is deliberately CPU-expensive; run it on the
        // blocking pool so it cannot stall the async workers. Once started it
        // runs to completion, there is no cancellation point.
        let authenticator = Arc::clone(&self.authenticator);
        let password = request.password;
        let stored_hash = credential.password_hash.clone();
        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &claims)
        })
        .await
        .map_err(|e| AuthError::VerificationFailure(e.to_string()))?;

        let token = match outcome {
            Ok(result) => result.access_token,
            Err(AuthenticationError::InvalidCredentials) => {
                return Err(AuthError::InvalidCredentials)
            }
            Err(AuthenticationError::Password(e)) => {
                return Err(AuthError::VerificationFailure(e.to_string()))
            }
            Err(AuthenticationError::Token(e)) => {
                return Err(AuthError::TokenIssuanceFailure(e.to_string()))
            }
        };

        Ok(AuthenticatedUser { credential, token })
    }
}
