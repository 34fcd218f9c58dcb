pub mod env {
    pub const ENV_PREFIX: &str = "GATEKEEPER";
    pub const ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_CONFIG_FILE: &str = "config/default";
pub const DEFAULT_LOGIN_PATH: &str = "/api/login";
pub const DEFAULT_TRACING_FILTER: &str = "info";

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
