//! Axum integration for the Gatekeeper login router.
//!
//! This crate bridges axum's request and response types to the
//! framework-agnostic types defined in `gatekeeper_core`.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  gatekeeper_core: HttpRequest,           │
//! │  HttpResponse, ResponseBuilder           │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  gatekeeper_axum: Axum implementations   │
//! │  - AxumResponseBuilder                   │
//! │  - login route handler                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use gatekeeper_axum::routes;
//!
//! let app = Router::new()
//!     .route("/api/login", post(routes::login::<HashMapAuthUseCase, RegexEmailValidator>))
//!     .with_state(Arc::new(login_router));
//! ```

pub mod adapters;
pub mod routes;

// Re-export for convenience
pub use adapters::{AxumResponseBuilder, response_builder};
