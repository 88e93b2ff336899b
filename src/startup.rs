//! Wiring of the application context.

use tracing::info;

use crate::api::{create_auth_api, ApiError};
use crate::config::ConfigV1;
use crate::state::AppContext;
use crate::store::Store;

/// Builds the backend and an empty store from the configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client for the configured backend cannot be built.
pub fn build_context(config: &ConfigV1) -> Result<AppContext, ApiError> {
    let api = create_auth_api(&config.api)?;
    info!("Using '{}' for authentication", api.get_name());

    Ok(AppContext {
        api,
        store: Store::new(),
    })
}
