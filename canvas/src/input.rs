//! Input model: mouse buttons, resize directions, and the gesture state
//! machine.
//!
//! `Gesture` is the active pointer interaction being tracked between
//! pointer-down and pointer-up, carrying all context needed to compute
//! incremental position/size updates and to emit a commit on release.
//! Exactly one gesture is active at a time; hit dispatch (background vs.
//! card header vs. resize handle) happens in the host's DOM layer, which
//! calls the matching `Engine::on_*_pointer_down` entry point.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::layout::CardId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` value.
    #[must_use]
    pub fn from_dom(button: i16) -> Option<Self> {
        match button {
            0 => Some(Self::Primary),
            1 => Some(Self::Middle),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }
}

/// Which handle of a card started a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeDirection {
    /// Right edge handle; adjusts width only.
    Right,
    /// Bottom edge handle; adjusts height only.
    Bottom,
    /// Bottom-right corner handle; adjusts both.
    Corner,
}

impl ResizeDirection {
    /// Whether this direction changes the card width.
    #[must_use]
    pub fn affects_width(self) -> bool {
        matches!(self, Self::Right | Self::Corner)
    }

    /// Whether this direction changes the card height.
    #[must_use]
    pub fn affects_height(self) -> bool {
        matches!(self, Self::Bottom | Self::Corner)
    }
}

/// The active pointer gesture.
///
/// Each variant carries the context needed to compute deltas on every
/// pointer-move and to emit the final commit on pointer-up.
#[derive(Debug, Clone)]
pub enum Gesture {
    /// No gesture in progress; waiting for the next pointer-down.
    Idle,
    /// The user is panning the canvas by dragging its background.
    Panning {
        /// Screen position minus the pan at gesture start; each move sets
        /// `pan = screen - anchor`.
        anchor: Point,
    },
    /// The user is moving a card across the canvas by its header.
    DraggingCard {
        /// Id of the card being dragged.
        id: CardId,
        /// Screen-space offset from the card origin to the grab point,
        /// held fixed for the duration of the drag.
        grab: Point,
    },
    /// The user is resizing a card from one of its handles.
    ResizingCard {
        /// Id of the card being resized.
        id: CardId,
        /// Which handle is being dragged.
        direction: ResizeDirection,
        /// Screen-space pointer position at the start of the resize.
        start_screen: Point,
        /// Card width at the start of the resize, as actually rendered.
        start_width: f64,
        /// Card height at the start of the resize, as actually rendered.
        start_height: f64,
    },
}

impl Default for Gesture {
    fn default() -> Self {
        Self::Idle
    }
}

impl Gesture {
    /// Whether any gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
