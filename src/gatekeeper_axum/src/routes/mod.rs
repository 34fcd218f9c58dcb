//! Axum-specific route handlers.
//!
//! Routes read the raw request with axum's extractors, hand it to the
//! framework-agnostic `LoginRouter`, and write its response back through
//! `AxumResponseBuilder`.

pub mod login;

pub use login::{login, login_request_from_bytes};
