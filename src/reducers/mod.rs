//! Pure state-transition functions.
//!
//! Each slice reducer maps `(state, action)` to a new state without side
//! effects; [`root_reducer`] combines them into the full [`RootState`].

pub mod auth_reducer;
pub mod signup_reducer;

use serde::{Deserialize, Serialize};

use crate::actions::Action;
pub use auth_reducer::{auth_reducer, AuthState};
pub use signup_reducer::{signup_reducer, SignupState};

/// The whole state tree held by the store.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    pub login: AuthState,
    pub signup: SignupState,
}

/// Runs every slice reducer on `action`.
pub fn root_reducer(state: &RootState, action: &Action) -> RootState {
    RootState {
        login: auth_reducer(Some(&state.login), action),
        signup: signup_reducer(Some(&state.signup), action),
    }
}
