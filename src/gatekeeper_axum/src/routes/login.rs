//! Axum-specific login route.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::Response};
use gatekeeper_application::LoginRouter;
use gatekeeper_core::{AuthUseCase, EmailValidator, HttpRequest, LoginBody};

use crate::adapters::response_builder;

/// Axum login route.
///
/// The body is taken as raw bytes rather than through `Json` so that a
/// missing or unparseable body reaches the router as a bodyless request
/// instead of being rejected by axum with its own status code.
#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<A, V>(
    State(router): State<Arc<LoginRouter<A, V>>>,
    body: Bytes,
) -> Response
where
    A: AuthUseCase + 'static,
    V: EmailValidator + 'static,
{
    let request = login_request_from_bytes(&body);

    router.handle(Some(&request)).await.write_to(response_builder())
}

/// Turn a raw JSON body into the router's request type.
pub fn login_request_from_bytes(body: &[u8]) -> HttpRequest {
    if body.is_empty() {
        tracing::warn!("Login request has no body");
        return HttpRequest::default();
    }

    match serde_json::from_slice::<LoginBody>(body) {
        Ok(login_body) => HttpRequest::with_body(login_body),
        Err(e) => {
            tracing::warn!(error = %e, "Login request body is not valid JSON credentials");
            HttpRequest::default()
        }
    }
}
