use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use tokio::sync::RwLock;

use gatekeeper_core::{AccessToken, AuthUseCase};
use secrecy::{ExposeSecret, Secret};
use uuid::Uuid;

/// In-memory auth use case keyed by email.
///
/// Every successful authentication issues a fresh random token. Clones share
/// the same credential map.
#[derive(Default, Clone)]
pub struct HashMapAuthUseCase {
    credentials: Arc<RwLock<HashMap<String, Secret<String>>>>,
}

impl HashMapAuthUseCase {
    pub fn new() -> Self {
        Self {
            credentials: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_credentials<I>(credentials: I) -> Self
    where
        I: IntoIterator<Item = (String, Secret<String>)>,
    {
        Self {
            credentials: Arc::new(RwLock::new(credentials.into_iter().collect())),
        }
    }

    /// Register credentials, replacing any password already stored for the email.
    pub async fn add_credentials(&self, email: String, password: Secret<String>) {
        let mut credentials = self.credentials.write().await;
        credentials.insert(email, password);
    }
}

#[async_trait::async_trait]
impl AuthUseCase for HashMapAuthUseCase {
    type Error = Infallible;

    #[tracing::instrument(name = "HashMapAuthUseCase::auth", skip(self, password))]
    async fn auth(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<Option<AccessToken>, Self::Error> {
        let credentials = self.credentials.read().await;

        let Some(stored) = credentials.get(email) else {
            tracing::debug!("Unknown email");
            return Ok(None);
        };
        if stored.expose_secret() != password.expose_secret() {
            tracing::debug!("Password mismatch");
            return Ok(None);
        }

        Ok(Some(AccessToken::new(Uuid::new_v4().to_string())))
    }
}
