use crate::models::{FailurePayload, FieldErrors};

/// Everything that can go wrong while talking to the authentication backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, errors: FieldErrors },
    /// The request could not complete (connection refused, timeout, ...).
    #[error("error sending request: {0}")]
    Network(String),
    /// A 2xx response whose body did not have the expected shape.
    #[error("error decoding response: {0}")]
    Decode(String),
    /// The HTTP client itself could not be built.
    #[error("error building http client: {0}")]
    Client(String),
}

/// Failures are normalised into the single shape the reducers understand.
impl From<ApiError> for FailurePayload {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { status, errors } => FailurePayload::new(errors, Some(status)),
            other => FailurePayload::new(FieldErrors::single("error", other.to_string()), None),
        }
    }
}
