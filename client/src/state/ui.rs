//! Transient UI state shared across components.

use uuid::Uuid;

/// Widget state that is neither server data nor card geometry.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Group whose color picker popover is open, if any. At most one picker
    /// is open at a time.
    pub color_picker_group: Option<Uuid>,
}
