//! Resource List View
//!
//! The one pattern every resource view follows: fetch the collection once on
//! mount, keep it in a per-instance signal, render it as a titled table.

use leptos::*;
use octofit_shared::{Resource, ResourceKind, TableRow};

use crate::client::{fetch_collection, ClientError, ResourceClient};
use crate::state::{AppState, ConsoleDiagnostics, Diagnostics, ListState};

/// Create the display state of a view and start its mount-time fetch
pub fn use_resource_list<R: Resource>() -> RwSignal<ListState<R>> {
    let client = use_context::<AppState>()
        .unwrap_or_else(AppState::from_environment)
        .client;

    use_resource_list_with(client)
}

/// Same as [`use_resource_list`], fetching through `client`
pub fn use_resource_list_with<R, C>(client: C) -> RwSignal<ListState<R>>
where
    R: Resource,
    C: ResourceClient + Clone + 'static,
{
    let state = create_rw_signal(ListState::<R>::new());

    // Fetch on mount only
    create_effect(move |prev_run: Option<()>| {
        if prev_run.is_some() {
            return;
        }

        let client = client.clone();
        spawn_local(async move {
            let outcome = fetch_collection::<R, _>(&client).await;
            settle_into(state, outcome, &ConsoleDiagnostics);
        });
    });

    state
}

/// Apply a fetch outcome to a view's state
///
/// Returns `false` without touching `diagnostics` when the view was
/// unmounted before the fetch resolved.
pub fn settle_into<R: Resource>(
    state: RwSignal<ListState<R>>,
    outcome: Result<Vec<R>, ClientError>,
    diagnostics: &dyn Diagnostics,
) -> bool {
    let landed = state.try_update(|s| s.settle(outcome, diagnostics)).is_some();
    if !landed {
        tracing::debug!("{} view was unmounted before its fetch resolved", R::KIND);
    }
    landed
}

/// Mount a complete view for the collection of `R`
pub fn resource_list_view<R: Resource>() -> impl IntoView {
    let state = use_resource_list::<R>();

    view! {
        <ResourceTable
            kind=R::KIND
            rows=Signal::derive(move || state.with(|s| s.table().rows))
            loading=Signal::derive(move || state.with(|s| s.is_loading()))
        />
    }
}

/// Titled table with one keyed body row per record
#[component]
pub fn ResourceTable(
    kind: ResourceKind,
    #[prop(into)] rows: Signal<Vec<TableRow>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="card mb-4">
            <div class="card-body">
                <h2 class="card-title">{kind.title()}</h2>
                <table
                    class="table table-striped"
                    aria-busy=move || if loading.get() { "true" } else { "false" }
                >
                    <thead>
                        <tr>
                            {kind.columns().iter().map(|header| view! { <th>{*header}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|row| row.key.clone()
                            children=move |row| view! {
                                <tr>
                                    {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use octofit_shared::User;

    use crate::state::{LoadPhase, RecordedDiagnostics};

    /// Client serving a fixed users body and counting requests
    #[derive(Clone)]
    struct CountingClient {
        body: &'static str,
        calls: Rc<Cell<usize>>,
    }

    impl CountingClient {
        fn new(body: &'static str) -> Self {
            Self {
                body,
                calls: Rc::new(Cell::new(0)),
            }
        }
    }

    #[async_trait::async_trait(?Send)]
    impl ResourceClient for CountingClient {
        async fn fetch_body(&self, _kind: ResourceKind) -> Result<String, ClientError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.body.to_string())
        }
    }

    #[test]
    fn test_mount_fetches_once() {
        let runtime = create_runtime();
        let client = CountingClient::new(r#"[{"id": 1, "name": "zerocool"}]"#);

        let state = use_resource_list_with::<User, _>(client.clone());

        assert_eq!(client.calls.get(), 1);
        assert_eq!(state.with_untracked(|s| s.phase()), LoadPhase::Loaded);
        assert_eq!(state.with_untracked(|s| s.records()[0].name.clone()), "zerocool");

        // Later state changes do not refetch
        state.update(|s| s.settle(Ok(Vec::new()), &RecordedDiagnostics::default()));
        assert_eq!(client.calls.get(), 1);

        // A second mount is a new fetch
        let _again = use_resource_list_with::<User, _>(client.clone());
        assert_eq!(client.calls.get(), 2);

        runtime.dispose();
    }

    #[test]
    fn test_settle_into_live_view() {
        let runtime = create_runtime();
        let state = create_rw_signal(ListState::<User>::new());
        let diagnostics = RecordedDiagnostics::default();

        let landed = settle_into(
            state,
            Err(ClientError::ConnectionFailed("offline".to_string())),
            &diagnostics,
        );

        assert!(landed);
        assert_eq!(state.with_untracked(|s| s.phase()), LoadPhase::Errored);
        assert_eq!(
            diagnostics.entries(),
            vec!["Error fetching users: Connection failed: offline".to_string()]
        );

        runtime.dispose();
    }

    #[test]
    fn test_settle_after_unmount_is_dropped() {
        let runtime = create_runtime();
        let state = create_rw_signal(ListState::<User>::new());
        let diagnostics = RecordedDiagnostics::default();
        state.dispose();

        let landed = settle_into(
            state,
            Err(ClientError::ConnectionFailed("offline".to_string())),
            &diagnostics,
        );

        assert!(!landed);
        assert!(diagnostics.entries().is_empty());
        assert!(state.try_with_untracked(|s| s.phase()).is_none());

        runtime.dispose();
    }
}
