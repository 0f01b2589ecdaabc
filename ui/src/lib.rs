//! OctoFit UI Library
//!
//! Browser front end of OctoFit Tracker: four read-only views (activities,
//! teams, users, workouts), each fetching its collection once on mount and
//! rendering it as a table.
//!
//! # Modules
//!
//! - [`app`]: Root application component
//! - [`client`]: Transport abstraction (`ResourceClient`, `HttpClient`)
//! - [`components`]: Resource views
//! - [`config`]: API base URL resolution
//! - [`state`]: Per-view display state and diagnostics

pub mod app;
pub mod client;
pub mod components;
pub mod config;
pub mod state;

pub use app::App;
