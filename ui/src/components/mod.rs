//! UI Components
//!
//! - `resource_list`: the shared fetch-on-mount table pattern
//! - `resources`: the four resource views built on it

pub mod resource_list;
pub mod resources;

pub use resource_list::{
    resource_list_view, settle_into, use_resource_list, use_resource_list_with, ResourceTable,
};
pub use resources::{Activities, Teams, Users, Workouts};
