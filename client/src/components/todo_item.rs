//! A single todo row: checkbox, editable title, optional note, delete.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Todo, UpdateTodo};
use crate::state::groups::GroupsState;

/// One todo inside a group card.
#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let groups = expect_context::<RwSignal<GroupsState>>();

    let editing = RwSignal::new(false);
    let editing_note = RwSignal::new(false);

    let id = todo.id;
    let completed = todo.completed;
    let title = todo.title.clone();
    let note = todo.note.clone();

    let toggle_completed = move |_| {
        leptos::task::spawn_local(async move {
            let body = UpdateTodo { completed: Some(!completed), ..UpdateTodo::default() };
            if let Some(updated) = api::update_todo(id, &body).await {
                groups.update(|s| s.replace_todo(updated));
            }
        });
    };

    let commit_title = move |raw: String| {
        editing.set(false);
        let trimmed = raw.trim().to_owned();
        // Empty titles are not committed; the old one stays.
        if trimmed.is_empty() {
            return;
        }
        leptos::task::spawn_local(async move {
            let body = UpdateTodo { title: Some(trimmed), ..UpdateTodo::default() };
            if let Some(updated) = api::update_todo(id, &body).await {
                groups.update(|s| s.replace_todo(updated));
            }
        });
    };

    let commit_note = move |raw: String| {
        editing_note.set(false);
        let value = raw.trim().to_owned();
        leptos::task::spawn_local(async move {
            let note = if value.is_empty() { None } else { Some(value) };
            let body = UpdateTodo { note: Some(note), ..UpdateTodo::default() };
            if let Some(updated) = api::update_todo(id, &body).await {
                groups.update(|s| s.replace_todo(updated));
            }
        });
    };

    let delete = move |_| {
        leptos::task::spawn_local(async move {
            if api::delete_todo(id).await {
                groups.update(|s| s.remove_todo(id));
            }
        });
    };

    // Completed todos are read-only until unchecked.
    let start_editing = move |_| {
        if !completed {
            editing.set(true);
        }
    };

    let title_view = {
        let title = title.clone();
        move || {
            if editing.get() {
                let current = title.clone();
                view! {
                    <input
                        class="todo-item__title-input"
                        type="text"
                        value=current
                        autofocus
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                commit_title(event_target_value(&ev));
                            }
                        }
                        on:blur=move |ev| {
                            if editing.get_untracked() {
                                commit_title(event_target_value(&ev));
                            }
                        }
                    />
                }
                .into_any()
            } else {
                let text = title.clone();
                view! {
                    <span class="todo-item__title" on:dblclick=start_editing>{text}</span>
                }
                .into_any()
            }
        }
    };

    let note_view = {
        let note = note.clone();
        move || {
            if editing_note.get() {
                let current = note.clone().unwrap_or_default();
                view! {
                    <textarea
                        class="todo-item__note-editor"
                        autofocus
                        prop:value=current
                        on:blur=move |ev| {
                            if editing_note.get_untracked() {
                                commit_note(event_target_value(&ev));
                            }
                        }
                    ></textarea>
                }
                .into_any()
            } else {
                match note.clone() {
                    Some(text) => view! { <p class="todo-item__note">{text}</p> }.into_any(),
                    None => ().into_any(),
                }
            }
        }
    };

    view! {
        <li class="todo-item" class=("todo-item--completed", move || completed)>
            <div class="todo-item__row">
                <input
                    type="checkbox"
                    class="todo-item__checkbox"
                    prop:checked=completed
                    on:change=toggle_completed
                />
                {title_view}
                <div class="todo-item__actions">
                    <button
                        class="todo-item__action"
                        title="Note"
                        on:click=move |_| editing_note.update(|open| *open = !*open)
                    >
                        "✎"
                    </button>
                    <button class="todo-item__action todo-item__action--delete" title="Delete" on:click=delete>
                        "×"
                    </button>
                </div>
            </div>
            {note_view}
        </li>
    }
}
