pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AuthSetting, GatekeeperSetting, ServerSetting, SettingsError, TracingSetting, UserCredentials,
};
