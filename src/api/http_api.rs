use std::time::Duration;

use reqwest::StatusCode;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::base::AuthApi;
use super::errors::ApiError;
use crate::models::{
    FieldErrors, LoginCredentials, LoginPayload, SignupPayload, SignupRequest,
    SocialLoginRequest, SocialProfile,
};

fn default_name() -> String {
    "Authors Haven API".to_string()
}

fn default_timeout_in_ms() -> u64 {
    5000
}

/// The config needed to reach the remote Authors Haven API.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct HttpApiConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Base URL the endpoint paths are appended to, e.g. `https://host/api`.
    pub base_url: String,
    #[serde(default = "default_timeout_in_ms")]
    pub timeout_in_ms: u64,
}

/// Shape of a rejection body: `{"errors": {...}}`.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: FieldErrors,
}

/// Talks to the remote API over HTTP with a shared client.
pub struct HttpAuthApi {
    config: HttpApiConfig,
    client: reqwest::Client,
}

impl HttpAuthApi {
    pub fn new(config: &HttpApiConfig) -> Result<Self, ApiError> {
        info!(
            "Creating HttpAuthApi '{}' for {} (timeout {}ms)",
            config.name, config.base_url, config.timeout_in_ms
        );
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self {
            config: config.clone(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// POSTs `body` as JSON and decodes a 2xx answer into `R`.
    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(
            event_name = "api.http.request",
            event_domain = "api",
            url = url.as_str(),
            "sending request"
        );

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if status.is_success() {
            serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            warn!(
                event_name = "api.http.rejected",
                event_domain = "api",
                url = url.as_str(),
                status = status.as_u16(),
                "request rejected by server"
            );
            Err(rejection(status, &text))
        }
    }
}

/// Builds the `Rejected` error, falling back to a generic message when the
/// body carries no usable `errors` mapping.
fn rejection(status: StatusCode, body: &str) -> ApiError {
    let errors = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.errors)
        .ok()
        .filter(|errors| !errors.is_empty())
        .unwrap_or_else(|| {
            FieldErrors::single("error", format!("Unexpected status code: {}", status))
        });
    ApiError::Rejected {
        status: status.as_u16(),
        errors,
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthApi {
    fn get_name(&self) -> &str {
        &self.config.name
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginPayload, ApiError> {
        let payload: LoginPayload = self.post("/login", credentials).await?;
        if payload.user.is_empty() {
            return Err(ApiError::Decode("login response carries no user data".to_string()));
        }
        Ok(payload)
    }

    async fn social_login(
        &self,
        request: &SocialLoginRequest,
    ) -> Result<SocialProfile, ApiError> {
        self.post("/social/login", request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<SignupPayload, ApiError> {
        self.post("/signup", request).await
    }
}
