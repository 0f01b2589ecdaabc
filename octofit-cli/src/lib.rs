//! OctoFit Library
//!
//! Core modules for the OctoFit development backend.

pub mod api;
pub mod cli;
pub mod db;
pub mod server;

// Re-export AppState for convenience
pub use server::AppState;
