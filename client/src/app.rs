//! Root application component.
//!
//! Owns the authoritative group list: loads it from the REST API on
//! startup, merges the client-side card layouts stored in the browser, and
//! provides the shared signals every component reads. Mutations flow back
//! through the API from the components that own them; this component only
//! adds groups and frames the page.

use leptos::prelude::*;

use crate::components::board_canvas::BoardCanvas;
use crate::components::status_bar::StatusBar;
use crate::net::api;
use crate::net::types::CreateGroup;
use crate::state::canvas_view::CanvasViewState;
use crate::state::groups::{GroupsState, merge_layouts};
use crate::state::ui::UiState;
use crate::util::layout;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    let stored = layout::load();

    let groups = RwSignal::new(GroupsState { groups: Vec::new(), loading: true });
    let ui = RwSignal::new(UiState::default());
    let canvas_view = RwSignal::new(CanvasViewState::from_camera(stored.camera));

    provide_context(groups);
    provide_context(ui);
    provide_context(canvas_view);

    let initial_camera = stored.camera;
    let stored_cards = stored.cards;
    leptos::task::spawn_local(async move {
        let fetched = api::fetch_groups().await.unwrap_or_default();
        groups.update(|s| {
            s.groups = merge_layouts(fetched, &stored_cards);
            s.loading = false;
        });
    });

    let add_group = move |_| {
        leptos::task::spawn_local(async move {
            let body = CreateGroup { name: Some("New Group".to_owned()), ..CreateGroup::default() };
            if let Some(group) = api::create_group(&body).await {
                groups.update(|s| s.push_group(group));
            }
        });
    };

    view! {
        <div class="app">
            <header class="app__toolbar">
                <h1 class="app__title">"Corkboard"</h1>
                <button class="app__add-group" on:click=add_group>"+ Add Group"</button>
            </header>
            <main class="app__canvas">
                <BoardCanvas initial_camera=initial_camera/>
            </main>
            <StatusBar/>
        </div>
    }
}
