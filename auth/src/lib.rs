//! Authentication primitives library
//!
//! Provides the building blocks for username/password authentication:
//! - Password hashing and verification (Argon2id)
//! - Access token issuance and verification (HS256 JWT)
//! - An authenticator coordinating the two
//!
//! The host service owns credential lookup and failure mapping; this crate
//! only deals in password hashes, claims, and tokens.
//!
//! # Examples
//!
//! ## Password Verification
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Access Tokens
//! ```
//! use auth::{AccessClaims, TokenIssuer};
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = AccessClaims::for_user("user123", "alice", Duration::hours(1));
//! let token = issuer.sign(&claims).unwrap();
//! let decoded = issuer.verify(&token).unwrap();
//! assert_eq!(decoded.sub, "user123");
//! ```
//!
//! ## Complete Verification Flow
//! ```
//! use auth::{AccessClaims, Authenticator};
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let hash = auth.hash_password("password123").unwrap();
//!
//! let claims = AccessClaims::for_user("user123", "alice", Duration::hours(1));
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//! assert!(!result.access_token.is_empty());
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::AccessClaims;
pub use jwt::TokenError;
pub use jwt::TokenIssuer;
pub use password::PasswordError;
pub use password::PasswordHasher;
