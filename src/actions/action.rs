use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::{FailurePayload, LoginPayload, SignupPayload, UserData};

/// A tagged state-transition request.
///
/// On the wire an action is `{"type": "LOGIN_USER_SUCCESS", "payload": {...}}`.
/// Any `type` not listed here deserialises to [`Action::Unknown`], which every
/// reducer passes through untouched. Payloads on unit actions are ignored and a
/// failure without a payload carries an empty error mapping.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    LoginUserRequest,
    LoginUserSuccess(LoginPayload),
    LoginUserFailure(FailurePayload),
    LogoutUser,
    SocialLoginSuccess(UserData),
    SignupUserRequest,
    SignupUserSuccess(SignupPayload),
    SignupUserFailure(FailurePayload),
    Unknown,
}

impl Action {
    /// The wire tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::LoginUserRequest => "LOGIN_USER_REQUEST",
            Action::LoginUserSuccess(_) => "LOGIN_USER_SUCCESS",
            Action::LoginUserFailure(_) => "LOGIN_USER_FAILURE",
            Action::LogoutUser => "LOGOUT_USER",
            Action::SocialLoginSuccess(_) => "SOCIAL_LOGIN_SUCCESS",
            Action::SignupUserRequest => "SIGNUP_USER_REQUEST",
            Action::SignupUserSuccess(_) => "SIGNUP_USER_SUCCESS",
            Action::SignupUserFailure(_) => "SIGNUP_USER_FAILURE",
            Action::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Deserialize)]
struct WireAction {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: Option<Value>,
}

fn required<T: DeserializeOwned>(kind: &str, payload: Option<Value>) -> Result<T, String> {
    let payload = payload.ok_or_else(|| format!("{} requires a payload", kind))?;
    serde_json::from_value(payload).map_err(|e| format!("{}: {}", kind, e))
}

fn failure(payload: Option<Value>) -> Result<FailurePayload, String> {
    match payload {
        None | Some(Value::Null) => Ok(FailurePayload::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| e.to_string()),
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let WireAction { kind, payload } = WireAction::deserialize(deserializer)?;
        let action = match kind.as_str() {
            "LOGIN_USER_REQUEST" => Ok(Action::LoginUserRequest),
            "LOGIN_USER_SUCCESS" => required(&kind, payload).map(Action::LoginUserSuccess),
            "LOGIN_USER_FAILURE" => failure(payload).map(Action::LoginUserFailure),
            "LOGOUT_USER" => Ok(Action::LogoutUser),
            "SOCIAL_LOGIN_SUCCESS" => required(&kind, payload).map(Action::SocialLoginSuccess),
            "SIGNUP_USER_REQUEST" => Ok(Action::SignupUserRequest),
            "SIGNUP_USER_SUCCESS" => required(&kind, payload).map(Action::SignupUserSuccess),
            "SIGNUP_USER_FAILURE" => failure(payload).map(Action::SignupUserFailure),
            _ => Ok(Action::Unknown),
        };
        action.map_err(D::Error::custom)
    }
}
