use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::access_token::AccessToken;

/// Port trait for checking the format of an email address.
///
/// Implementations decide what "valid" means (regex, a dedicated parser, a
/// remote lookup). Returning an error is distinct from returning `Ok(false)`:
/// the former means the check itself could not run.
pub trait EmailValidator: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn is_valid(&self, email: &str) -> Result<bool, Self::Error>;
}

/// Port trait for exchanging credentials for an access token.
///
/// # Returns
///
/// - `Ok(Some(token))` when the credentials are accepted
/// - `Ok(None)` when they are well formed but rejected
/// - `Err(_)` when authentication could not be carried out
///
/// Synchronous implementations simply return without awaiting anything.
#[async_trait]
pub trait AuthUseCase: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn auth(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<Option<AccessToken>, Self::Error>;
}
