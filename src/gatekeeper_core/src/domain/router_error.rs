use serde::{Serialize, Serializer, ser::SerializeStruct};
use thiserror::Error;

/// Request fields the login router knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Email,
    Password,
}

impl Param {
    pub fn as_str(self) -> &'static str {
        match self {
            Param::Email => "email",
            Param::Password => "password",
        }
    }
}

impl std::fmt::Display for Param {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every way a login request can fail.
///
/// The set is closed: anything a collaborator reports is folded into
/// [`RouterError::ServerError`] before it reaches the caller, so no internal
/// failure detail ever ends up in a response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    /// A required field is absent or empty. Maps to 400.
    #[error("Missing param: {0}")]
    MissingParam(Param),

    /// A field is present but was rejected by validation. Maps to 400.
    #[error("Invalid param: {0}")]
    InvalidParam(Param),

    /// The credentials were well formed but did not yield a token. Maps to 401.
    #[error("Unauthorized")]
    Unauthorized,

    /// Malformed request, missing collaborator or collaborator failure. Maps to 500.
    #[error("Internal error")]
    ServerError,
}

impl RouterError {
    pub fn status_code(&self) -> u16 {
        match self {
            RouterError::MissingParam(_) | RouterError::InvalidParam(_) => 400,
            RouterError::Unauthorized => 401,
            RouterError::ServerError => 500,
        }
    }

    /// Stable name of the error kind, used as the `error` field of the JSON body.
    pub fn kind(&self) -> &'static str {
        match self {
            RouterError::MissingParam(_) => "MissingParamError",
            RouterError::InvalidParam(_) => "InvalidParamError",
            RouterError::Unauthorized => "UnauthorizedError",
            RouterError::ServerError => "ServerError",
        }
    }
}

impl Serialize for RouterError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("RouterError", 2)?;
        state.serialize_field("error", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
