//! Resource Views
//!
//! One view per tracked collection.

use leptos::*;
use octofit_shared::{Activity, Team, User, Workout};

use super::resource_list::resource_list_view;

/// Activities with their durations
#[component]
pub fn Activities() -> impl IntoView {
    resource_list_view::<Activity>()
}

/// Teams with their members joined into one cell
#[component]
pub fn Teams() -> impl IntoView {
    resource_list_view::<Team>()
}

#[component]
pub fn Users() -> impl IntoView {
    resource_list_view::<User>()
}

/// Workouts with their descriptions
#[component]
pub fn Workouts() -> impl IntoView {
    resource_list_view::<Workout>()
}
