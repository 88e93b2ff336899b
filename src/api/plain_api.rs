use async_trait::async_trait;
use futures::lock::Mutex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::base::AuthApi;
use super::errors::ApiError;
use crate::models::{
    FieldErrors, LoginCredentials, LoginPayload, SignupPayload, SignupRequest,
    SocialLoginRequest, SocialProfile, UserData,
};

const LOGIN_NOT_FOUND: &str = "A user with this email and password was not found.";

/// PlainApiConfig lists the accounts an offline backend knows about.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct PlainApiConfig {
    /// A friendly name for logs.
    pub name: String,
    #[serde(default)]
    pub users: Vec<PlainUserEntry>,
}

/// Represents a single account.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct PlainUserEntry {
    pub email: String,
    pub username: String,
    pub password: String,
    /// Token returned on login; a fresh UUID is issued when absent.
    pub token: Option<String>,
    /// Access token a social provider would hand out for this account.
    pub social_token: Option<String>,
}

impl PlainUserEntry {
    fn to_user(&self) -> UserData {
        UserData::new(
            self.email.clone(),
            self.username.clone(),
            self.token
                .clone()
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        )
    }
}

/// An in-memory backend answering from the configured user list.
/// Signups are kept for the lifetime of the process.
pub struct PlainAuthApi {
    name: String,
    users: Mutex<Vec<PlainUserEntry>>,
}

impl PlainAuthApi {
    pub fn new(config: &PlainApiConfig) -> Self {
        info!(
            "Creating PlainAuthApi '{}' with {} user(s)",
            config.name,
            config.users.len()
        );
        Self {
            name: config.name.clone(),
            users: Mutex::new(config.users.clone()),
        }
    }
}

fn bad_request(errors: FieldErrors) -> ApiError {
    ApiError::Rejected {
        status: 400,
        errors,
    }
}

#[async_trait]
impl AuthApi for PlainAuthApi {
    fn get_name(&self) -> &str {
        &self.name
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginPayload, ApiError> {
        debug!("Plain login attempt for '{}'", credentials.email);
        let users = self.users.lock().await;
        users
            .iter()
            .find(|entry| {
                entry.email.eq_ignore_ascii_case(&credentials.email)
                    && entry.password == credentials.password
            })
            .map(|entry| LoginPayload::new(entry.to_user()))
            .ok_or_else(|| bad_request(FieldErrors::single("error", LOGIN_NOT_FOUND)))
    }

    async fn social_login(
        &self,
        request: &SocialLoginRequest,
    ) -> Result<SocialProfile, ApiError> {
        debug!("Plain social login attempt via '{}'", request.provider);
        let users = self.users.lock().await;
        users
            .iter()
            .find(|entry| entry.social_token.as_deref() == Some(request.access_token.as_str()))
            .map(|entry| {
                let user = entry.to_user();
                SocialProfile {
                    email: user.email,
                    username: user.username,
                    token: user.token,
                }
            })
            .ok_or_else(|| {
                bad_request(FieldErrors::single(
                    "email",
                    format!("No account is linked to this {} login.", request.provider),
                ))
            })
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupPayload, ApiError> {
        let mut users = self.users.lock().await;

        let mut errors = FieldErrors::new();
        if users
            .iter()
            .any(|entry| entry.email.eq_ignore_ascii_case(&request.email))
        {
            errors.push("email", "user with this email already exists.");
        }
        if users.iter().any(|entry| entry.username == request.username) {
            errors.push("username", "user with this username already exists.");
        }
        if !errors.is_empty() {
            return Err(bad_request(errors));
        }

        users.push(PlainUserEntry {
            email: request.email.clone(),
            username: request.username.clone(),
            password: request.password.clone(),
            token: None,
            social_token: None,
        });
        info!("Plain signup registered '{}'", request.username);

        Ok(SignupPayload {
            user: UserData {
                email: Some(request.email.clone()),
                username: Some(request.username.clone()),
                token: None,
            },
            message: Some(format!(
                "An activation link has been sent to {}.",
                request.email
            )),
        })
    }
}
