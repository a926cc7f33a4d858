//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate catalog data, search, and browser drag-and-drop
//! glue from components to improve reuse and testability.

pub mod block_catalog;
pub mod block_search;
pub mod drag;
