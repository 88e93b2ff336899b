pub mod base;

// Re-export the primary Store items so code outside can do
// "use crate::store::{Store, Dispatchable};"
pub use base::{Dispatchable, Store, Thunk};
