//! Transport-agnostic request and response values for the login flow.
//!
//! The router consumes an [`HttpRequest`] and always produces an
//! [`HttpResponse`]. Web frameworks translate their own types to and from these
//! at the edge, and write responses through the [`ResponseBuilder`] trait so
//! the core never depends on a framework.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  gatekeeper_core: request/response types │
//! │  and the ResponseBuilder trait           │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  gatekeeper_axum: AxumResponseBuilder    │
//! │  impl ResponseBuilder for it             │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  HttpResponse::write_to(builder)         │
//! │  (generic over framework)                │
//! └──────────────────────────────────────────┘
//! ```

use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::domain::{
    access_token::AccessToken,
    router_error::{Param, RouterError},
};

/// Credentials carried in the body of a login request.
///
/// Both fields are optional at this level; presence is a precondition checked
/// by the router, not by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

impl LoginBody {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(Secret::new(password.into())),
        }
    }
}

/// A login request as seen by the router.
///
/// A request without a body is structurally malformed and is answered with a
/// server error rather than a client error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpRequest {
    #[serde(default)]
    pub body: Option<LoginBody>,
}

impl HttpRequest {
    pub fn with_body(body: LoginBody) -> Self {
        Self { body: Some(body) }
    }
}

/// Payload of an [`HttpResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Error(RouterError),
    Success {
        #[serde(rename = "accessToken")]
        access_token: AccessToken,
    },
}

/// Response produced by the router for every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    /// 200 OK carrying the issued token.
    pub fn ok(access_token: AccessToken) -> Self {
        Self {
            status_code: 200,
            body: ResponseBody::Success { access_token },
        }
    }

    pub fn missing_param(param: Param) -> Self {
        Self::from(RouterError::MissingParam(param))
    }

    pub fn invalid_param(param: Param) -> Self {
        Self::from(RouterError::InvalidParam(param))
    }

    pub fn unauthorized() -> Self {
        Self::from(RouterError::Unauthorized)
    }

    pub fn server_error() -> Self {
        Self::from(RouterError::ServerError)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        match &self.body {
            ResponseBody::Success { access_token } => Some(access_token),
            ResponseBody::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&RouterError> {
        match &self.body {
            ResponseBody::Error(error) => Some(error),
            ResponseBody::Success { .. } => None,
        }
    }

    /// Write this response through a framework-specific builder.
    pub fn write_to<B: ResponseBuilder>(&self, builder: B) -> B::Response {
        match serde_json::to_value(&self.body) {
            Ok(body) => builder.status(self.status_code).json_body(body).build(),
            Err(_) => builder.status(500).build(),
        }
    }
}

impl From<RouterError> for HttpResponse {
    fn from(error: RouterError) -> Self {
        Self {
            status_code: error.status_code(),
            body: ResponseBody::Error(error),
        }
    }
}

/// Trait for building framework responses from an [`HttpResponse`].
///
/// Web frameworks implement this on their own builder types (via a newtype
/// wrapper where the orphan rule requires one).
///
/// # Design
///
/// This follows the builder pattern, allowing method chaining:
/// ```ignore
/// builder
///     .status(200)
///     .header("cache-control", "no-store")
///     .json_body(json!({"accessToken": "..."}))
///     .build()
/// ```
pub trait ResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set a JSON body; implementations also set `Content-Type: application/json`
    fn json_body(self, body: serde_json::Value) -> Self;

    /// Build the final response
    fn build(self) -> Self::Response;
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    // Records what was written so tests can inspect it
    #[derive(Default)]
    struct RecordingBuilder {
        status: Option<u16>,
        body: Option<serde_json::Value>,
    }

    impl ResponseBuilder for RecordingBuilder {
        type Response = Self;

        fn status(mut self, code: u16) -> Self {
            self.status = Some(code);
            self
        }

        fn header(self, _name: &str, _value: &str) -> Self {
            self
        }

        fn json_body(mut self, body: serde_json::Value) -> Self {
            self.body = Some(body);
            self
        }

        fn build(self) -> Self::Response {
            self
        }
    }

    #[test]
    fn test_login_body_deserializes_partial_input() {
        let request: HttpRequest =
            serde_json::from_str(r#"{"body": {"password": "any_password"}}"#).unwrap();

        let body = request.body.unwrap();
        assert!(body.email.is_none());
        assert_eq!(body.password.unwrap().expose_secret(), "any_password");
    }

    #[test]
    fn test_request_without_body_deserializes() {
        let request: HttpRequest = serde_json::from_str("{}").unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_success_response_serializes_access_token() {
        let response = HttpResponse::ok(AccessToken::new("valid_token"));

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "statusCode": 200,
                "body": { "accessToken": "valid_token" }
            })
        );
    }

    #[test]
    fn test_error_response_uses_error_status() {
        let response = HttpResponse::invalid_param(Param::Email);

        assert_eq!(response.status_code, 400);
        assert!(!response.is_success());
        assert_eq!(
            response.error(),
            Some(&RouterError::InvalidParam(Param::Email))
        );
        assert!(response.access_token().is_none());
    }

    #[test]
    fn test_write_to_builder() {
        let written = HttpResponse::unauthorized().write_to(RecordingBuilder::default());

        assert_eq!(written.status, Some(401));
        assert_eq!(
            written.body,
            Some(serde_json::json!({
                "error": "UnauthorizedError",
                "message": "Unauthorized"
            }))
        );
    }
}
