use serde::{Deserialize, Serialize};

use super::user::UserData;

/// Body of `POST /login`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /signup`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Body of `POST /social/login`: the identity provider name and the access
/// token it handed to the user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SocialLoginRequest {
    pub provider: String,
    pub access_token: String,
}

/// Identity payload returned for a social login. Providers are free to omit
/// fields, so everything is optional here and checked by the action creator.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialProfile {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl SocialProfile {
    /// The email, if present and not blank.
    pub fn email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}

impl From<SocialProfile> for UserData {
    fn from(profile: SocialProfile) -> Self {
        UserData {
            email: profile.email().map(str::to_string),
            username: profile.username,
            token: profile.token,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_social_email_counts_as_missing() {
        let profile = SocialProfile {
            email: Some("   ".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.email(), None);
        assert_eq!(SocialProfile::default().email(), None);
    }

    #[test]
    fn social_profile_converts_to_user_data() {
        let profile: SocialProfile = serde_json::from_str(
            r#"{"email": "kathiekim95@gmail.com", "username": "kathiekim", "token": "t"}"#,
        )
        .unwrap();
        let user = UserData::from(profile);
        assert_eq!(user, UserData::new("kathiekim95@gmail.com", "kathiekim", "t"));
    }

    #[test]
    fn social_email_is_stored_trimmed() {
        let profile = SocialProfile {
            email: Some("  a@b.c ".to_string()),
            username: Some("ab".to_string()),
            token: None,
        };
        let user = UserData::from(profile);
        assert_eq!(user.email.as_deref(), Some("a@b.c"));
        assert_eq!(user.username.as_deref(), Some("ab"));
    }
}
