pub mod errors;
pub mod requests;
pub mod user;

// Re-export so callers can do "use crate::models::*;"
pub use errors::{FailurePayload, FieldErrors};
pub use requests::{LoginCredentials, SignupRequest, SocialLoginRequest, SocialProfile};
pub use user::{LoginPayload, SignupPayload, UserData};
