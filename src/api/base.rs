use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::errors::ApiError;
use super::http_api::{HttpApiConfig, HttpAuthApi};
use super::plain_api::{PlainApiConfig, PlainAuthApi};
use crate::models::{
    LoginCredentials, LoginPayload, SignupPayload, SignupRequest, SocialLoginRequest,
    SocialProfile,
};

/// Which backend answers authentication requests.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone)]
#[serde(tag = "type")]
pub enum ApiConfig {
    #[serde(rename = "http")]
    Http(HttpApiConfig),
    #[serde(rename = "plain")]
    Plain(PlainApiConfig),
}

/// The authentication calls the action creators rely on.
///
/// Implementations only talk to the backend; turning results into actions
/// is the job of `crate::actions`.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// A descriptive name for the backend (for logs/debug).
    fn get_name(&self) -> &str;

    /// `POST /login`.
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginPayload, ApiError>;

    /// `POST /social/login`.
    async fn social_login(&self, request: &SocialLoginRequest)
        -> Result<SocialProfile, ApiError>;

    /// `POST /signup`.
    async fn signup(&self, request: &SignupRequest) -> Result<SignupPayload, ApiError>;
}

/// Create an authentication backend from a given config.
pub fn create_auth_api(config: &ApiConfig) -> Result<Arc<dyn AuthApi>, ApiError> {
    let api: Arc<dyn AuthApi> = match config {
        ApiConfig::Http(cfg) => Arc::new(HttpAuthApi::new(cfg)?),
        ApiConfig::Plain(cfg) => Arc::new(PlainAuthApi::new(cfg)),
    };
    info!(
        event_name = "api.created",
        event_domain = "api",
        api_name = api.get_name(),
        "authentication backend ready"
    );
    Ok(api)
}
