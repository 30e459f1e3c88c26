use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use crate::login::ports::CredentialStore;
use crate::login::service::LoginService;

pub struct AppState<CS>
where
    CS: CredentialStore,
{
    pub login_service: Arc<LoginService<CS>>,
}

// Manual impl: deriving Clone would demand CS: Clone, which the Arc makes
// unnecessary.
impl<CS> Clone for AppState<CS>
where
    CS: CredentialStore,
{
    fn clone(&self) -> Self {
        Self {
            login_service: Arc::clone(&self.login_service),
        }
    }
}

pub fn create_router<CS>(login_service: Arc<LoginService<CS>>) -> Router
where
    CS: CredentialStore,
{
    let state = AppState { login_service };

    let routes = Router::new().route("/api/auth/login", post(login::<CS>));

    // The span carries no headers or body fields: login traffic is
    // credential-bearing.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
