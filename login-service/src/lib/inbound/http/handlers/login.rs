use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;
use crate::login::errors::AuthError;
use crate::login::models::Credential;
use crate::login::models::LoginRequest;
use crate::login::ports::CredentialStore;
use crate::login::ports::LoginServicePort;

pub async fn login<CS: CredentialStore>(
    State(state): State<AppState<CS>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    // Absent fields become empty strings and fail validation in the domain,
    // so a missing password is a 400 rather than an extractor rejection.
    let request = LoginRequest::new(
        body.username.unwrap_or_default(),
        body.password.unwrap_or_default(),
    );
    let username = request.username.clone();

    match state.login_service.authenticate(request).await {
        Ok(authenticated) => Ok(ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                message: "Login successful".to_string(),
                user: (&authenticated.credential).into(),
                token: authenticated.token,
            },
        )),
        Err(err) => {
            match &err {
                AuthError::VerificationFailure(_)
                | AuthError::StoreUnavailable(_)
                | AuthError::TokenIssuanceFailure(_) => {
                    tracing::error!(username = %username, error = %err, "Login failed");
                }
                _ => {
                    tracing::debug!(username = %username, error = %err, "Login rejected");
                }
            }
            Err(ApiError::from(err))
        }
    }
}

/// HTTP request body for a login attempt (raw JSON).
///
/// Fields are optional so that presence is validated by the domain, and the
/// type deliberately has no Debug impl: it carries a cleartext password.
#[derive(Clone, Deserialize)]
pub struct LoginRequestBody {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub message: String,
    pub user: UserData,
    pub token: String,
}

/// Public projection of a credential record. No hash field exists here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Credential> for UserData {
    fn from(credential: &Credential) -> Self {
        Self {
            id: credential.id.to_string(),
            username: credential.username.as_str().to_string(),
            email: credential.email.as_str().to_string(),
            created_at: credential.created_at,
        }
    }
}
