pub mod api;
pub mod cli;
pub mod config;
pub mod error;
mod main_lib;
pub mod views;

pub use main_lib::{build_state, build_state_with_clock, init_database, init_tracing, AppState};
