//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Palette components own their local state; the page canvas reads shared
//! `PageState` from Leptos context.

pub mod block_button;
pub mod block_icon;
pub mod blocks_panel;
pub mod page_canvas;
pub mod sections_panel;
