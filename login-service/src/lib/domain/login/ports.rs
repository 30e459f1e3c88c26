use async_trait::async_trait;

use crate::login::errors::AuthError;
use crate::login::errors::StoreError;
use crate::login::models::AuthenticatedUser;
use crate::login::models::Credential;
use crate::login::models::LoginRequest;

/// Port for the login domain service.
#[async_trait]
pub trait LoginServicePort: Send + Sync + 'static {
    /// Authenticate a username/password pair and issue an access token.
    ///
    /// Stateless and reentrant: concurrent calls, including for the same
    /// username, need no coordination.
    ///
    /// # Errors
    /// * `MalformedRequest` - Username or password missing/empty
    /// * `UserNotFound` - No credential record for the username
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `VerificationFailure` - Hash verification faulted internally
    /// * `StoreUnavailable` - Credential store query or integrity fault
    /// * `TokenIssuanceFailure` - Token signing failed
    async fn authenticate(&self, request: LoginRequest) -> Result<AuthenticatedUser, AuthError>;
}

/// Read-only lookup into the persisted credential store.
///
/// The store owns the credential lifecycle; this service never mutates it.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Retrieve the credential record for a username (exact match).
    ///
    /// # Returns
    /// Optional credential record (None if no user has this username)
    ///
    /// # Errors
    /// * `Unavailable` - Query failed (connection, timeout, driver fault)
    /// * `Integrity` - Store state violates its contract (e.g. duplicate usernames)
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError>;
}
