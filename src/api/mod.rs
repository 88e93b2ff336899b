pub mod base;
pub mod errors;
pub mod http_api;
pub mod plain_api;

// Re-export so callers can do "use crate::api::{AuthApi, create_auth_api};"
pub use base::*;
pub use errors::ApiError;
