use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::models::{FailurePayload, UserData};

/// The signup slice. A registered account still has to be activated by
/// email, so signing up never authenticates.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupState {
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default)]
    pub is_registered: bool,
    #[serde(default)]
    pub user: UserData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<FailurePayload>,
}

impl SignupState {
    /// First server message for `field` from the last failure.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.error
            .as_ref()
            .and_then(|error| error.errors.first(field))
    }
}

pub fn signup_reducer(state: Option<&SignupState>, action: &Action) -> SignupState {
    let state = state.cloned().unwrap_or_default();
    match action {
        Action::SignupUserRequest => SignupState {
            is_loading: true,
            error: None,
            ..state
        },
        Action::SignupUserSuccess(payload) => SignupState {
            is_loading: false,
            is_registered: true,
            user: payload.user.clone(),
            message: payload.message.clone(),
            error: None,
        },
        Action::SignupUserFailure(payload) => SignupState {
            is_loading: false,
            is_registered: false,
            user: UserData::default(),
            message: None,
            error: Some(payload.clone()),
        },
        _ => state,
    }
}
