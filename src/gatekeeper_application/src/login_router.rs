use gatekeeper_core::{
    AccessToken, AuthUseCase, EmailValidator, HttpRequest, HttpResponse, LoginBody, Param,
    RouterError,
};
use secrecy::{ExposeSecret, Secret};

/// Login router - validates a login request and dispatches it to the auth use case
///
/// Both collaborators are optional so that a router assembled from incomplete
/// configuration still answers every request, with a server error.
pub struct LoginRouter<A, V>
where
    A: AuthUseCase,
    V: EmailValidator,
{
    auth_use_case: Option<A>,
    email_validator: Option<V>,
}

impl<A, V> LoginRouter<A, V>
where
    A: AuthUseCase,
    V: EmailValidator,
{
    pub fn new(auth_use_case: A, email_validator: V) -> Self {
        Self {
            auth_use_case: Some(auth_use_case),
            email_validator: Some(email_validator),
        }
    }

    /// Build a router whose collaborators may be missing.
    pub fn from_parts(auth_use_case: Option<A>, email_validator: Option<V>) -> Self {
        Self {
            auth_use_case,
            email_validator,
        }
    }

    /// Handle a login request
    ///
    /// # Arguments
    /// * `request` - The incoming request, `None` when the transport produced nothing
    ///
    /// # Returns
    /// An HttpResponse for every input: 200 with the access token, 400 for a
    /// missing or invalid field, 401 for rejected credentials, 500 otherwise
    #[tracing::instrument(name = "LoginRouter::handle", skip_all)]
    pub async fn handle(&self, request: Option<&HttpRequest>) -> HttpResponse {
        match self.route(request).await {
            Ok(access_token) => {
                tracing::info!("Login succeeded");
                HttpResponse::ok(access_token)
            }
            Err(error) => {
                tracing::warn!(status = error.status_code(), %error, "Login rejected");
                HttpResponse::from(error)
            }
        }
    }

    async fn route(&self, request: Option<&HttpRequest>) -> Result<AccessToken, RouterError> {
        let body = request
            .and_then(|request| request.body.as_ref())
            .ok_or(RouterError::ServerError)?;

        let (email, password) = required_fields(body)?;

        let auth_use_case = self.auth_use_case.as_ref().ok_or_else(|| {
            tracing::error!("No auth use case configured");
            RouterError::ServerError
        })?;
        let email_validator = self.email_validator.as_ref().ok_or_else(|| {
            tracing::error!("No email validator configured");
            RouterError::ServerError
        })?;

        let is_email_valid = email_validator.is_valid(email).map_err(|e| {
            tracing::error!(error = %e, "Email validator failed");
            RouterError::ServerError
        })?;
        if !is_email_valid {
            return Err(RouterError::InvalidParam(Param::Email));
        }

        let access_token = auth_use_case.auth(email, password).await.map_err(|e| {
            tracing::error!(error = %e, "Auth use case failed");
            RouterError::ServerError
        })?;

        access_token
            .filter(|token| !token.is_empty())
            .ok_or(RouterError::Unauthorized)
    }
}

// Email is always checked before password
fn required_fields(body: &LoginBody) -> Result<(&str, &Secret<String>), RouterError> {
    let email = body
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .ok_or(RouterError::MissingParam(Param::Email))?;

    let password = body
        .password
        .as_ref()
        .filter(|password| !password.expose_secret().is_empty())
        .ok_or(RouterError::MissingParam(Param::Password))?;

    Ok((email, password))
}
