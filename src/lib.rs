//! Library exports for havenauth, shared between the binary and tests.

pub mod actions;
pub mod api;
pub mod config;
pub mod models;
pub mod reducers;
pub mod routes;
pub mod startup;
pub mod state;
pub mod store;
pub mod utils;
pub mod validation;
