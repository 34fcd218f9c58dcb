pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    access_token::AccessToken,
    router_error::{Param, RouterError},
};

pub use ports::services::{AuthUseCase, EmailValidator};

pub use http_abstraction::{HttpRequest, HttpResponse, LoginBody, ResponseBody, ResponseBuilder};
