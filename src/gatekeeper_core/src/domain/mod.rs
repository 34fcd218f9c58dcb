pub mod access_token;
pub mod router_error;
