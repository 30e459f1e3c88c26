use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::login::errors::StoreError;
use crate::login::models::Credential;
use crate::login::models::EmailAddress;
use crate::login::models::UserId;
use crate::login::models::Username;
use crate::login::ports::CredentialStore;

/// Credential store backed by the users table.
///
/// Read-only: this service never writes credentials. The pool is owned by
/// the host process and shared with nothing else in this crate.
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    username: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl CredentialRow {
    fn into_credential(self) -> Result<Credential, StoreError> {
        Ok(Credential {
            id: UserId(self.id),
            username: Username::new(self.username)
                .map_err(|e| StoreError::Integrity(e.to_string()))?,
            email: EmailAddress::new(self.email)
                .map_err(|e| StoreError::Integrity(e.to_string()))?,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

#[async_trait]
impl CredentialStore for PostgresCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        let rows = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        // The unique index makes a second row impossible; seeing one means
        // the store is corrupt and no row can be trusted.
        if rows.len() > 1 {
            return Err(StoreError::Integrity(format!(
                "{} credential rows for username {}",
                rows.len(),
                username
            )));
        }

        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.into_credential()?)),
            None => Ok(None),
        }
    }
}
