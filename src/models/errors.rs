use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Field name -> list of error messages, as returned by the backend
/// (`{"email": ["user with this email already exists."]}`).
///
/// Some endpoints send a bare string instead of a list; both forms are accepted.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, OneOrMany>::deserialize(deserializer)?;
        Ok(FieldErrors(
            raw.into_iter()
                .map(|(field, messages)| match messages {
                    OneOrMany::One(message) => (field, vec![message]),
                    OneOrMany::Many(messages) => (field, messages),
                })
                .collect(),
        ))
    }
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mapping holding exactly one message for one field.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.push(field, message);
        errors
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// First message recorded for `field`, if any.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Payload carried by every failure action: the per-field errors plus the
/// HTTP status when the failure came from a server response.
///
/// All fields default, so `{}` is a valid (empty) failure.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FailurePayload {
    #[serde(default)]
    pub errors: FieldErrors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl FailurePayload {
    pub fn new(errors: FieldErrors, status: Option<u16>) -> Self {
        FailurePayload { errors, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lists_and_bare_strings() {
        let errors: FieldErrors = serde_json::from_str(
            r#"{"email": ["Enter a valid email address."], "error": "oops!, something went wrong"}"#,
        )
        .unwrap();
        assert_eq!(errors.first("email"), Some("Enter a valid email address."));
        assert_eq!(errors.get("error").unwrap(), ["oops!, something went wrong"]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn empty_failure_payload_is_valid() {
        let payload: FailurePayload = serde_json::from_str("{}").unwrap();
        assert!(payload.errors.is_empty());
        assert_eq!(payload.status, None);
    }

    #[test]
    fn missing_field_has_no_message() {
        assert_eq!(FieldErrors::new().first("username"), None);
    }
}
