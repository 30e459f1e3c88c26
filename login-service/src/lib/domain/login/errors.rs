use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username too short: minimum {min} characters, got {actual}")]
    TooShort { min: usize, actual: usize },

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error(
        "Username contains invalid characters (only alphanumeric, underscore, and hyphen allowed)"
    )]
    InvalidCharacters,
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Credential store faults.
///
/// Both variants are infrastructure failures: `Integrity` covers a store
/// that violates its own uniqueness contract or holds rows this domain
/// cannot represent.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Credential store query failed: {0}")]
    Unavailable(String),

    #[error("Credential store integrity violation: {0}")]
    Integrity(String),
}

/// Failure taxonomy for the authenticate operation.
///
/// Every failure is terminal for the call; nothing is retried. The first
/// three are client-attributable, the rest are server faults.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Username and password are required")]
    MalformedRequest,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    VerificationFailure(String),

    #[error("Credential store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    #[error("Token issuance failed: {0}")]
    TokenIssuanceFailure(String),
}
