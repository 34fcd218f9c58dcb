pub mod authentication;
pub mod config;
pub mod email_validation;

pub use authentication::HashMapAuthUseCase;
pub use config::{GatekeeperSetting, SettingsError};
pub use email_validation::RegexEmailValidator;
