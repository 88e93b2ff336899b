use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::models::{FailurePayload, UserData};

/// The authentication slice.
///
/// `data` is empty whenever `is_authenticated` is false.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub data: UserData,
    pub is_authenticated: bool,
    /// A login request is in flight.
    #[serde(default)]
    pub is_loading: bool,
    /// Payload of the last failure, cleared by any later success or logout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FailurePayload>,
}

impl AuthState {
    /// First server message for `field` from the last failure.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|error| error.errors.first(field))
    }
}

/// Reduces the authentication slice. `None` stands for a store that has not
/// been initialised yet and starts from the default state.
pub fn auth_reducer(state: Option<&AuthState>, action: &Action) -> AuthState {
    let state = state.cloned().unwrap_or_default();
    match action {
        Action::LoginUserRequest => AuthState {
            is_loading: true,
            ..state
        },
        Action::LoginUserSuccess(payload) => AuthState {
            data: payload.user.clone(),
            is_authenticated: true,
            is_loading: false,
            error: None,
        },
        Action::SocialLoginSuccess(user) => AuthState {
            data: user.clone(),
            is_authenticated: true,
            is_loading: false,
            error: None,
        },
        Action::LoginUserFailure(payload) => AuthState {
            data: UserData::default(),
            is_authenticated: false,
            is_loading: false,
            error: Some(payload.clone()),
        },
        Action::LogoutUser => AuthState::default(),
        _ => state,
    }
}
