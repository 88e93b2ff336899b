//! Services shared by everything that drives the store.
//!
//! There is no global state: the context is built once at startup and handed
//! to whoever needs to dispatch or read state.

use std::sync::Arc;

use crate::api::AuthApi;
use crate::store::Store;

#[derive(Clone)]
pub struct AppContext {
    /// Backend the action creators call.
    pub api: Arc<dyn AuthApi>,
    /// The state container.
    pub store: Store,
}
