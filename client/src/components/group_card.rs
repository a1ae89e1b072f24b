//! A single group card: editable name, color picker, todo list, resize
//! handles.
//!
//! Dragging and resizing are not handled here; the card only marks itself
//! up (`data-group-id`, `data-direction`) for the canvas-level pointer
//! dispatch. Everything else about a group (rename, recolor, add/remove
//! todos, delete) is owned by this component.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::todo_item::TodoItem;
use crate::net::api;
use crate::net::types::{CreateTodo, Todo, UpdateGroup};
use crate::state::groups::GroupsState;
use crate::state::ui::UiState;

/// Preset pastel colors offered by the picker.
pub const PRESET_COLORS: [&str; 12] = [
    "#ffffff", // White
    "#ffcccc", // Light Red
    "#ffcc99", // Light Orange
    "#ffffcc", // Light Yellow
    "#ccffcc", // Light Green
    "#ccffff", // Light Cyan
    "#ccccff", // Light Blue
    "#ffccff", // Light Purple
    "#ffb3ba", // Pink
    "#bae1ff", // Baby Blue
    "#c9e4ca", // Mint
    "#fff4e6", // Cream
];

/// Name shown when a rename is committed blank.
const UNNAMED_GROUP: &str = "Unnamed Group";

/// One group card on the canvas.
#[component]
pub fn GroupCard(id: Uuid) -> impl IntoView {
    let groups = expect_context::<RwSignal<GroupsState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let board_group = Memo::new(move |_| groups.with(|s| s.find(id).cloned()));
    let editing_name = RwSignal::new(false);

    // Position and size come from the client-only layout; color from the
    // server half. A card whose group vanished mid-teardown renders hidden
    // until the list removes it.
    let card_style = move || {
        board_group.get().map_or_else(
            || "display: none;".to_owned(),
            |bg| {
                format!(
                    "left: {}px; top: {}px; width: {}px; height: {}px; background-color: {};",
                    bg.layout.x,
                    bg.layout.y,
                    bg.layout.width,
                    bg.layout.height,
                    bg.group.color.as_deref().unwrap_or("#ffffff"),
                )
            },
        )
    };

    let commit_name = move |raw: String| {
        editing_name.set(false);
        let trimmed = raw.trim().to_owned();
        if trimmed.is_empty() {
            // Blank names fall back to a placeholder locally; nothing worth
            // a round-trip happened.
            groups.update(|s| {
                if let Some(entry) = s.groups.iter_mut().find(|bg| bg.group.id == id) {
                    entry.group.name = UNNAMED_GROUP.to_owned();
                }
            });
            return;
        }
        leptos::task::spawn_local(async move {
            let body = UpdateGroup { name: Some(trimmed), ..UpdateGroup::default() };
            if let Some(group) = api::update_group(id, &body).await {
                groups.update(|s| s.replace_group(group));
            }
        });
    };

    let add_todo = move |_| {
        leptos::task::spawn_local(async move {
            let body = CreateTodo {
                title: Some("New Todo".to_owned()),
                group_id: Some(id),
                ..CreateTodo::default()
            };
            if let Some(todo) = api::create_todo(&body).await {
                groups.update(|s| s.push_todo(todo));
            }
        });
    };

    let delete_group = move |_| {
        leptos::task::spawn_local(async move {
            if api::delete_group(id).await {
                groups.update(|s| s.remove_group(id));
            }
        });
    };

    let toggle_picker = move |_| {
        ui.update(|u| {
            u.color_picker_group = if u.color_picker_group == Some(id) { None } else { Some(id) };
        });
    };

    let pick_color = move |color: &'static str| {
        ui.update(|u| u.color_picker_group = None);
        leptos::task::spawn_local(async move {
            let body = UpdateGroup { color: Some(Some(color.to_owned())), ..UpdateGroup::default() };
            if let Some(group) = api::update_group(id, &body).await {
                groups.update(|s| s.replace_group(group));
            }
        });
    };

    let name_view = move || {
        if editing_name.get() {
            let current = board_group.get_untracked().map(|bg| bg.group.name).unwrap_or_default();
            view! {
                <input
                    class="group-card__name-input"
                    type="text"
                    value=current
                    autofocus
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            commit_name(event_target_value(&ev));
                        }
                    }
                    on:blur=move |ev| {
                        if editing_name.get_untracked() {
                            commit_name(event_target_value(&ev));
                        }
                    }
                />
            }
            .into_any()
        } else {
            let name = board_group.get().map(|bg| bg.group.name).unwrap_or_default();
            view! {
                <span class="group-card__name" on:dblclick=move |_| editing_name.set(true)>
                    {name}
                </span>
            }
            .into_any()
        }
    };

    let palette = move || {
        PRESET_COLORS
            .iter()
            .copied()
            .map(|color| {
                view! {
                    <button
                        class="group-card__swatch"
                        style=format!("background-color: {color};")
                        on:click=move |_| pick_color(color)
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="group-card" data-group-id=id.to_string() style=card_style>
            <div class="group-card__header">
                {name_view}
                <div class="group-card__actions">
                    <button class="group-card__action" title="Color" on:click=toggle_picker>
                        "◐"
                    </button>
                    <button
                        class="group-card__action group-card__action--delete"
                        title="Delete group"
                        on:click=delete_group
                    >
                        "×"
                    </button>
                </div>
            </div>
            <Show when=move || ui.get().color_picker_group == Some(id)>
                <div class="group-card__palette">{palette}</div>
            </Show>
            <ul class="group-card__todos">
                <For
                    each=move || board_group.get().map(|bg| bg.group.todos).unwrap_or_default()
                    key=Clone::clone
                    children=move |todo: Todo| view! { <TodoItem todo=todo/> }
                />
            </ul>
            <button class="group-card__add-todo" on:click=add_todo>"+ Add Todo"</button>
            <div class="resize-handle resize-handle--right" data-direction="right"></div>
            <div class="resize-handle resize-handle--bottom" data-direction="bottom"></div>
            <div class="resize-handle resize-handle--corner" data-direction="corner"></div>
        </div>
    }
}
