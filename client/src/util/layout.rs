//! Client-only persistence of board layout: card rectangles plus camera.
//!
//! The server never sees any of this; positions, sizes, pan, and zoom are
//! purely presentational and live in `localStorage` keyed per browser.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashMap;

use canvas::camera::Camera;
use canvas::layout::CardLayout;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::storage;

const STORAGE_KEY: &str = "corkboard_layout_v1";

/// Everything the client persists about board presentation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BoardLayout {
    #[serde(default)]
    pub cards: HashMap<Uuid, CardLayout>,
    #[serde(default)]
    pub camera: Camera,
}

/// Load the stored layout, or an empty default for first visits (and for
/// records that fail to parse after a schema change).
#[must_use]
pub fn load() -> BoardLayout {
    storage::load_json(STORAGE_KEY).unwrap_or_default()
}

/// Persist the layout.
pub fn save(layout: &BoardLayout) {
    storage::save_json(STORAGE_KEY, layout);
}
