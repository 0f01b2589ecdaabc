//! Shared types for the OctoFit UI, backend and CLI
//!
//! This crate contains everything both sides of the wire agree on:
//! - Resource records (activities, teams, users, workouts)
//! - Typed decoding of collection responses
//! - The table model every resource view renders
//! - API base URL resolution

pub mod decode;
pub mod display;
pub mod endpoint;
pub mod resources;

pub use decode::*;
pub use display::*;
pub use endpoint::*;
pub use resources::*;
