//! Root Application Component
//!
//! Sets up the shared client and lays out the four resource views on a
//! single page.

use leptos::*;
use leptos_meta::*;

use crate::components::{Activities, Teams, Users, Workouts};
use crate::state::AppState;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let app_state = AppState::from_environment();
    provide_context(app_state);

    view! {
        <Title text="OctoFit Tracker" />
        <main class="container py-4">
            <h1 class="mb-4">"OctoFit Tracker"</h1>
            <Activities />
            <Teams />
            <Users />
            <Workouts />
        </main>
    }
}
