//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed zoom scale (farthest out).
pub const MIN_ZOOM: f64 = 0.1;

/// Largest allowed zoom scale. Cards are DOM content; zooming past 1:1 only
/// blurs text.
pub const MAX_ZOOM: f64 = 1.0;

/// Zoom change applied per wheel notch.
pub const ZOOM_STEP: f64 = 0.1;

// ── Card geometry ───────────────────────────────────────────────

/// Minimum card width in world units; resize clamps here.
pub const MIN_CARD_WIDTH: f64 = 300.0;

/// Minimum card height in world units; resize clamps here.
pub const MIN_CARD_HEIGHT: f64 = 200.0;

/// Width assigned to a card that has never been explicitly sized.
pub const DEFAULT_CARD_WIDTH: f64 = 320.0;

/// Height assigned to a card that has never been explicitly sized.
pub const DEFAULT_CARD_HEIGHT: f64 = 240.0;
