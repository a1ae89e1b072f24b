//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models: `groups` is the authoritative board content merged with
//! client-only card layouts, `canvas_view` is camera telemetry for chrome,
//! `ui` is transient widget state.

pub mod canvas_view;
pub mod groups;
pub mod ui;
