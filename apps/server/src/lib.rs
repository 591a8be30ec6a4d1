//! Finboard server library.
//!
//! Exposes the router, configuration and state builders so integration
//! tests can drive the API without binding a socket.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
