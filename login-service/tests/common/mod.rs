use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;
use login_service::domain::login::errors::StoreError;
use login_service::domain::login::models::Credential;
use login_service::domain::login::models::EmailAddress;
use login_service::domain::login::models::UserId;
use login_service::domain::login::models::Username;
use login_service::domain::login::ports::CredentialStore;
use login_service::domain::login::service::LoginService;
use login_service::inbound::http::router::create_router;
use uuid::Uuid;

pub const TEST_TOKEN_SECRET: &[u8] = b"test-secret-key-for-token-signing-32b!";

/// Credential store backed by a fixed in-memory set of records.
pub struct InMemoryCredentialStore {
    credentials: Vec<Credential>,
}

impl InMemoryCredentialStore {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Credential>, StoreError> {
        Ok(self
            .credentials
            .iter()
            .find(|c| c.username.as_str() == username)
            .cloned())
    }
}

/// Credential store whose every query fails, for exercising store faults.
pub struct UnavailableCredentialStore;

#[async_trait]
impl CredentialStore for UnavailableCredentialStore {
    async fn find_by_username(&self, _username: &str) -> Result<Option<Credential>, StoreError> {
        Err(StoreError::Unavailable(
            "connection refused (os error 111)".to_string(),
        ))
    }
}

/// Test application that spawns a real server on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn<CS: CredentialStore>(store: CS) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let authenticator = Arc::new(Authenticator::new(TEST_TOKEN_SECRET));
        let login_service = Arc::new(LoginService::new(Arc::new(store), authenticator));
        let router = create_router(login_service);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }
}

/// Build a stored credential with a real Argon2id hash of `password`.
pub fn credential(username: &str, password: &str) -> Credential {
    let authenticator = Authenticator::new(TEST_TOKEN_SECRET);
    Credential {
        id: UserId(Uuid::new_v4()),
        username: Username::new(username.to_string()).expect("valid username"),
        email: EmailAddress::new(format!("{}@example.com", username)).expect("valid email"),
        password_hash: authenticator
            .hash_password(password)
            .expect("Failed to hash password"),
        created_at: Utc::now(),
    }
}
