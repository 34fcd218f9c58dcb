use std::convert::Infallible;

use gatekeeper_core::EmailValidator;
use regex::Regex;

/// One `@`, no whitespace, and a dot somewhere in the domain part.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Email validator backed by a compiled regular expression.
#[derive(Debug, Clone)]
pub struct RegexEmailValidator {
    pattern: Regex,
}

impl RegexEmailValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Self::with_pattern(DEFAULT_EMAIL_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl EmailValidator for RegexEmailValidator {
    type Error = Infallible;

    fn is_valid(&self, email: &str) -> Result<bool, Self::Error> {
        Ok(self.pattern.is_match(email))
    }
}
