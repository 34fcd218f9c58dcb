//! # Gatekeeper - Login Router Library
//!
//! This is a facade crate that re-exports all public APIs from the gatekeeper components.
//! Use this crate to get access to the login router and its adapters in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gatekeeper = { path = "../gatekeeper" }
//! ```
//!
//! ## Structure
//!
//! - **Core types**: `HttpRequest`, `HttpResponse`, `RouterError`, `AccessToken`
//! - **Collaborator traits**: `EmailValidator`, `AuthUseCase`
//! - **Router**: `LoginRouter` - validates requests and dispatches to the auth use case
//! - **Adapters**: `RegexEmailValidator`, `HashMapAuthUseCase`, `GatekeeperSetting`
//! - **Service**: `LoginService` - axum router serving the login route

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use gatekeeper_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatekeeper_core::{
    AccessToken, HttpRequest, HttpResponse, LoginBody, Param, ResponseBody, ResponseBuilder,
    RouterError,
};

// ============================================================================
// Collaborator Traits (Ports)
// ============================================================================

/// Collaborator trait definitions
pub mod ports {
    pub use gatekeeper_core::{AuthUseCase, EmailValidator};
}

pub use gatekeeper_core::{AuthUseCase, EmailValidator};

// ============================================================================
// Router (Application Layer)
// ============================================================================

pub use gatekeeper_application::LoginRouter;

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Email validator implementations
    pub mod email_validation {
        pub use gatekeeper_adapters::email_validation::*;
    }

    /// Auth use case implementations
    pub mod authentication {
        pub use gatekeeper_adapters::authentication::*;
    }

    /// Configuration
    pub mod config {
        pub use gatekeeper_adapters::config::*;
    }

    /// Axum integration
    pub mod axum {
        pub use gatekeeper_axum::*;
    }
}

// Re-export commonly used adapters at root level
pub use gatekeeper_adapters::{GatekeeperSetting, HashMapAuthUseCase, RegexEmailValidator};

// ============================================================================
// Login Service (Main Entry Point)
// ============================================================================

/// Main login service
pub use gatekeeper_service::{LoginService, build_login_router, init_tracing};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing collaborator traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
