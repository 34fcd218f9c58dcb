pub mod login_service;
pub mod telemetry;

pub use login_service::{LoginService, ServiceError, build_login_router};
pub use telemetry::init_tracing;
