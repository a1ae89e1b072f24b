//! Bottom status bar showing board counts and zoom level.

use leptos::prelude::*;

use crate::state::canvas_view::CanvasViewState;
use crate::state::groups::GroupsState;

/// Status bar at the bottom of the board.
#[component]
pub fn StatusBar() -> impl IntoView {
    let groups = expect_context::<RwSignal<GroupsState>>();
    let canvas_view = expect_context::<RwSignal<CanvasViewState>>();

    let counts = move || {
        groups.with(|s| format!("{} groups · {} todos", s.groups.len(), s.todo_count()))
    };
    let loading = move || groups.with(|s| s.loading);
    let zoom = move || format!("{}%", canvas_view.get().zoom_percent());

    view! {
        <footer class="status-bar">
            <span class="status-bar__counts">{counts}</span>
            <Show when=loading>
                <span class="status-bar__loading">"Loading…"</span>
            </Show>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__zoom">{zoom}</span>
        </footer>
    }
}
