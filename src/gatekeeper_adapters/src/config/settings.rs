use config::{Config, ConfigError, Environment, File, Map};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::constants::{
    DEFAULT_CONFIG_FILE, DEFAULT_LOGIN_PATH, DEFAULT_TRACING_FILTER,
    env::{ENV_PREFIX, ENV_SEPARATOR},
    prod,
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSetting {
    pub address: String,
    pub login_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TracingSetting {
    pub filter: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserCredentials {
    pub email: String,
    pub password: Secret<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSetting {
    /// Credentials seeded into the in-memory auth use case
    #[serde(default)]
    pub users: Vec<UserCredentials>,
    /// Overrides the email validator's default pattern
    #[serde(default)]
    pub email_pattern: Option<String>,
}

/// Service settings, layered as defaults, then an optional JSON file, then
/// `GATEKEEPER__*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct GatekeeperSetting {
    pub server: ServerSetting,
    pub tracing: TracingSetting,
    #[serde(default)]
    pub auth: AuthSetting,
}

impl GatekeeperSetting {
    /// Load settings from `.env`, `config/default.json` and the environment.
    pub fn load() -> Result<Self, SettingsError> {
        // A missing .env file is the normal case outside development
        dotenvy::dotenv().ok();
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Load settings using `file` (extension optional) as the file layer.
    ///
    /// The file is not required to exist.
    pub fn load_from(file: &str) -> Result<Self, SettingsError> {
        Self::load_layered(file, environment())
    }

    /// Same layering as [`load_from`](Self::load_from), with `env_vars`
    /// standing in for the process environment.
    ///
    /// Keys use the `GATEKEEPER__SECTION__KEY` form.
    pub fn load_from_env_vars<I, K, V>(file: &str, env_vars: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let env_vars: Map<String, String> = env_vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self::load_layered(file, environment().source(Some(env_vars)))
    }

    fn load_layered(file: &str, environment: Environment) -> Result<Self, SettingsError> {
        let settings = Config::builder()
            .set_default("server.address", prod::APP_ADDRESS)?
            .set_default("server.login_path", DEFAULT_LOGIN_PATH)?
            .set_default("tracing.filter", DEFAULT_TRACING_FILTER)?
            .add_source(File::with_name(file).required(false))
            .add_source(environment)
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
}
