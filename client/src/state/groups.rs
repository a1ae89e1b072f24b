//! Board content state: server groups merged with client-only card layouts.
//!
//! ARCHITECTURE
//! ============
//! The root component owns one `RwSignal<GroupsState>` as the single source
//! of truth. Server data (groups, todos) arrives via the REST client; card
//! rectangles come from browser storage and never leave the client. The
//! mutation helpers here are pure so they can be tested off-wasm.

#[cfg(test)]
#[path = "groups_test.rs"]
mod groups_test;

use std::collections::HashMap;

use canvas::consts::{DEFAULT_CARD_HEIGHT, DEFAULT_CARD_WIDTH};
use canvas::layout::CardLayout;
use uuid::Uuid;

use crate::net::types::{Group, Todo};

/// One group plus its client-side card rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardGroup {
    pub group: Group,
    pub layout: CardLayout,
}

/// All board content, in server order.
#[derive(Clone, Debug, Default)]
pub struct GroupsState {
    pub groups: Vec<BoardGroup>,
    pub loading: bool,
}

impl GroupsState {
    /// Find a group by id.
    #[must_use]
    pub fn find(&self, id: Uuid) -> Option<&BoardGroup> {
        self.groups.iter().find(|bg| bg.group.id == id)
    }

    /// Replace a group's server half, keeping its layout. Unknown ids are
    /// ignored (the group was deleted under us).
    pub fn replace_group(&mut self, group: Group) {
        if let Some(entry) = self.groups.iter_mut().find(|bg| bg.group.id == group.id) {
            entry.group = group;
        }
    }

    /// Append a freshly created group with a cascading default placement.
    pub fn push_group(&mut self, group: Group) {
        let layout = place_new_card(group.id, self.groups.len());
        self.groups.push(BoardGroup { group, layout });
    }

    /// Remove a group (and with it, its todos).
    pub fn remove_group(&mut self, id: Uuid) {
        self.groups.retain(|bg| bg.group.id != id);
    }

    /// Update a card rectangle in place.
    pub fn set_layout(&mut self, layout: CardLayout) {
        if let Some(entry) = self.groups.iter_mut().find(|bg| bg.group.id == layout.id) {
            entry.layout = layout;
        }
    }

    /// Move a card, keeping its size.
    pub fn move_card(&mut self, id: Uuid, x: f64, y: f64) {
        if let Some(entry) = self.groups.iter_mut().find(|bg| bg.group.id == id) {
            entry.layout.x = x;
            entry.layout.y = y;
        }
    }

    /// Resize a card, keeping its position.
    pub fn resize_card(&mut self, id: Uuid, width: f64, height: f64) {
        if let Some(entry) = self.groups.iter_mut().find(|bg| bg.group.id == id) {
            entry.layout.width = width;
            entry.layout.height = height;
        }
    }

    /// Append a new todo to its group.
    pub fn push_todo(&mut self, todo: Todo) {
        let Some(group_id) = todo.group_id else {
            return;
        };
        if let Some(entry) = self.groups.iter_mut().find(|bg| bg.group.id == group_id) {
            entry.group.todos.push(todo);
        }
    }

    /// Replace a todo within its group, matching by id.
    pub fn replace_todo(&mut self, todo: Todo) {
        for entry in &mut self.groups {
            if let Some(slot) = entry.group.todos.iter_mut().find(|t| t.id == todo.id) {
                *slot = todo;
                return;
            }
        }
    }

    /// Remove a todo wherever it lives.
    pub fn remove_todo(&mut self, todo_id: Uuid) {
        for entry in &mut self.groups {
            entry.group.todos.retain(|t| t.id != todo_id);
        }
    }

    /// Snapshot of all card rectangles, for persistence.
    #[must_use]
    pub fn layouts(&self) -> HashMap<Uuid, CardLayout> {
        self.groups.iter().map(|bg| (bg.group.id, bg.layout)).collect()
    }

    /// Total todo count across all groups.
    #[must_use]
    pub fn todo_count(&self) -> usize {
        self.groups.iter().map(|bg| bg.group.todos.len()).sum()
    }
}

/// Default placement for the `index`-th card: a diagonal cascade from the
/// top-left corner, so new groups never stack exactly on top of each other.
#[must_use]
pub fn place_new_card(id: Uuid, index: usize) -> CardLayout {
    #[allow(clippy::cast_precision_loss)]
    let offset = 100.0 + 50.0 * index as f64;
    CardLayout { id, x: offset, y: offset, width: DEFAULT_CARD_WIDTH, height: DEFAULT_CARD_HEIGHT }
}

/// Pair server groups with stored card rectangles; groups the client has
/// never seen get a cascading default placement.
#[must_use]
pub fn merge_layouts(groups: Vec<Group>, stored: &HashMap<Uuid, CardLayout>) -> Vec<BoardGroup> {
    groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| {
            let layout = stored
                .get(&group.id)
                .copied()
                .unwrap_or_else(|| place_new_card(group.id, index));
            BoardGroup { group, layout }
        })
        .collect()
}
