//! Actions and the functions that create them.
//!
//! An [`Action`] is an immutable record describing a state transition. The
//! creators in [`creators`] turn user requests into actions, calling the
//! authentication backend first when needed.

pub mod action;
pub mod creators;

pub use action::Action;
pub use creators::*;
