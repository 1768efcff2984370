pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
