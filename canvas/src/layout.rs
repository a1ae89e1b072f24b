//! Layout model: card rectangles and the in-memory store.
//!
//! A *card* is the spatial footprint of one todo group on the canvas. The
//! server knows nothing about these rectangles; they are client-only UI
//! state, loaded from and saved to browser storage by the host. The engine
//! reads and mutates them through [`LayoutStore`] while gestures are active.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{MIN_CARD_HEIGHT, MIN_CARD_WIDTH};

/// Unique identifier for a card. Shared with the group it positions.
pub type CardId = Uuid;

/// Position and size of one group card, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    pub id: CardId,
    /// Left edge of the card.
    pub x: f64,
    /// Top edge of the card.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Sparse update for a card layout. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// In-memory store of card layouts.
pub struct LayoutStore {
    cards: HashMap<CardId, CardLayout>,
}

impl LayoutStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { cards: HashMap::new() }
    }

    /// Insert or replace a card, clamping its size to the minimums.
    pub fn insert(&mut self, card: CardLayout) {
        self.cards.insert(card.id, clamped(card));
    }

    /// Remove a card by id, returning it if it was present.
    pub fn remove(&mut self, id: &CardId) -> Option<CardLayout> {
        self.cards.remove(id)
    }

    /// Return a card by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardLayout> {
        self.cards.get(id)
    }

    /// Apply a partial update to an existing card, clamping the resulting
    /// size. Returns false if the card doesn't exist.
    pub fn apply_patch(&mut self, id: &CardId, patch: CardPatch) -> bool {
        let Some(card) = self.cards.get_mut(id) else {
            return false;
        };
        if let Some(x) = patch.x {
            card.x = x;
        }
        if let Some(y) = patch.y {
            card.y = y;
        }
        if let Some(w) = patch.width {
            card.width = w.max(MIN_CARD_WIDTH);
        }
        if let Some(h) = patch.height {
            card.height = h.max(MIN_CARD_HEIGHT);
        }
        true
    }

    /// Replace all cards with a full snapshot.
    pub fn load_snapshot(&mut self, cards: Vec<CardLayout>) {
        self.cards.clear();
        for card in cards {
            self.cards.insert(card.id, clamped(card));
        }
    }

    /// Return all cards sorted by id for deterministic iteration.
    #[must_use]
    pub fn sorted_cards(&self) -> Vec<&CardLayout> {
        let mut cards: Vec<&CardLayout> = self.cards.values().collect();
        cards.sort_by(|a, b| a.id.cmp(&b.id));
        cards
    }

    /// Number of cards currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the store contains no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}

fn clamped(mut card: CardLayout) -> CardLayout {
    card.width = card.width.max(MIN_CARD_WIDTH);
    card.height = card.height.max(MIN_CARD_HEIGHT);
    card
}
