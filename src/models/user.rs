use serde::{Deserialize, Serialize};

/// The authenticated user fields kept in the login state.
///
/// Every field is optional: an empty `UserData` serialises to `{}` and is
/// what the login state holds whenever nobody is authenticated.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl UserData {
    /// Construct a fully populated user record.
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        UserData {
            email: Some(email.into()),
            username: Some(username.into()),
            token: Some(token.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.username.is_none() && self.token.is_none()
    }
}

/// Body of a successful `POST /login`: `{"user": {...}}`. The `user` key is
/// mandatory.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginPayload {
    pub user: UserData,
}

impl LoginPayload {
    pub fn new(user: UserData) -> Self {
        LoginPayload { user }
    }
}

/// Body of a successful `POST /signup`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupPayload {
    #[serde(default)]
    pub user: UserData,
    /// Optional human readable note, e.g. "check your inbox".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
