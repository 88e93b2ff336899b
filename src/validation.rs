//! Client-side form checks run before any request is made.
//!
//! These only guard obvious mistakes; the server's answer stays authoritative
//! and arrives through the failure actions.

use crate::models::{
    FailurePayload, FieldErrors, LoginCredentials, SignupRequest, SocialLoginRequest,
};

pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// A form that failed validation, with one entry per offending field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationError(pub FieldErrors);

impl ValidationError {
    pub fn errors(&self) -> &FieldErrors {
        &self.0
    }
}

fn require(errors: &mut FieldErrors, field: &str, label: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{} is required.", label));
    }
}

fn finish<T>(errors: FieldErrors, value: T) -> Result<T, ValidationError> {
    if errors.is_empty() {
        Ok(value)
    } else {
        Err(ValidationError(errors))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginCredentials, ValidationError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "email", "Email", &self.email);
        require(&mut errors, "password", "Password", &self.password);
        finish(
            errors,
            LoginCredentials {
                email: self.email.trim().to_string(),
                password: self.password.clone(),
            },
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Whether the confirmation matches; drives the confirm field's invalid flag.
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    pub fn validate(&self) -> Result<SignupRequest, ValidationError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "email", "Email", &self.email);
        require(&mut errors, "username", "Username", &self.username);
        require(&mut errors, "password", "Password", &self.password);
        if !self.passwords_match() {
            errors.push("confirm_password", PASSWORD_MISMATCH);
        }
        finish(
            errors,
            SignupRequest {
                email: self.email.trim().to_string(),
                username: self.username.trim().to_string(),
                password: self.password.clone(),
            },
        )
    }
}

/// Provider name and access token handed over by a social identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialForm {
    pub provider: String,
    pub access_token: String,
}

impl SocialForm {
    pub fn validate(&self) -> Result<SocialLoginRequest, ValidationError> {
        let mut errors = FieldErrors::new();
        require(&mut errors, "provider", "Provider", &self.provider);
        require(&mut errors, "access_token", "Access token", &self.access_token);
        finish(
            errors,
            SocialLoginRequest {
                provider: self.provider.trim().to_string(),
                access_token: self.access_token.trim().to_string(),
            },
        )
    }
}

/// The message to show next to `field`: a client-side error first, then the
/// first server message from the last failure. `None` means "no error".
pub fn field_message<'a>(
    client: Option<&'a FieldErrors>,
    server: Option<&'a FailurePayload>,
    field: &str,
) -> Option<&'a str> {
    client
        .and_then(|errors| errors.first(field))
        .or_else(|| server.and_then(|failure| failure.errors.first(field)))
}
