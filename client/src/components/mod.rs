//! UI components, leaves first: todo item, group card, board canvas, chrome.

pub mod board_canvas;
pub mod group_card;
pub mod status_bar;
pub mod todo_item;
