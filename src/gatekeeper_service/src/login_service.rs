use std::any::Any;
use std::sync::Arc;

use axum::{Router, body::Body, http::Response, routing::post};
use gatekeeper_adapters::{GatekeeperSetting, HashMapAuthUseCase, RegexEmailValidator};
use gatekeeper_application::LoginRouter;
use gatekeeper_axum::{response_builder, routes::login};
use gatekeeper_core::{AuthUseCase, EmailValidator, HttpResponse};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid email pattern: {0}")]
    InvalidEmailPattern(#[from] regex::Error),
    #[error("Invalid login path: {0:?}")]
    InvalidLoginPath(String),
}

/// HTTP service exposing the login router
pub struct LoginService {
    router: Router,
}

impl LoginService {
    /// Create a new LoginService serving `login_router` on `POST login_path`
    ///
    /// # Arguments
    /// * `login_router` - Router holding the auth use case and email validator
    /// * `login_path` - Path of the login route, e.g. `/api/login`
    ///
    /// # Errors
    /// `InvalidLoginPath` when `login_path` is not a plain absolute path.
    pub fn new<A, V>(
        login_router: LoginRouter<A, V>,
        login_path: &str,
    ) -> Result<Self, ServiceError>
    where
        A: AuthUseCase + 'static,
        V: EmailValidator + 'static,
    {
        validate_login_path(login_path)?;

        let router = Router::new()
            .route(login_path, post(login::<A, V>))
            .with_state(Arc::new(login_router));

        Ok(Self { router })
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self
            .router
            .layer(CatchPanicLayer::custom(server_error_for_panic))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );
        self
    }

    /// Convert the LoginService into a router that can be served or nested
    pub fn as_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the login service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_router();

        tracing::info!("Login service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}

/// The login route is static: it starts with `/` and has no captures or wildcards.
fn validate_login_path(path: &str) -> Result<(), ServiceError> {
    let has_capture_syntax = path.contains(['{', '}'])
        || path
            .split('/')
            .any(|segment| segment.starts_with(':') || segment.starts_with('*'));

    if !path.starts_with('/') || has_capture_syntax {
        return Err(ServiceError::InvalidLoginPath(path.to_string()));
    }
    Ok(())
}

fn server_error_for_panic(_panic: Box<dyn Any + Send + 'static>) -> Response<Body> {
    tracing::error!("Login handler panicked");
    HttpResponse::server_error().write_to(response_builder())
}

/// Assemble the reference login router from settings
///
/// The in-memory auth use case is seeded with `auth.users`, and the email
/// validator uses `auth.email_pattern` when one is configured.
pub fn build_login_router(
    settings: &GatekeeperSetting,
) -> Result<LoginRouter<HashMapAuthUseCase, RegexEmailValidator>, ServiceError> {
    let email_validator = match &settings.auth.email_pattern {
        Some(pattern) => RegexEmailValidator::with_pattern(pattern)?,
        None => RegexEmailValidator::new()?,
    };

    if settings.auth.users.is_empty() {
        tracing::warn!("No users configured, every login will be rejected");
    }
    let auth_use_case = HashMapAuthUseCase::with_credentials(
        settings
            .auth
            .users
            .iter()
            .map(|user| (user.email.clone(), user.password.clone())),
    );

    Ok(LoginRouter::new(auth_use_case, email_validator))
}
