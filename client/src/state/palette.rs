//! Local state for the block palette (tab, search query, open sections).
//!
//! DESIGN
//! ======
//! Palette state is transient chrome: it lives for the lifetime of the panel
//! and is never persisted or shared with page state.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::collections::HashSet;

use crate::util::block_catalog::{BLOCK_OPTIONS, BlockOption, DEFAULT_EXPANDED_SECTIONS};
use crate::util::block_search::filter_blocks;

/// Tabs available in the palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaletteTab {
    /// Flat, searchable option grid.
    Blocks,
    /// Collapsible grouped option list.
    #[default]
    Sections,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteState {
    pub tab: PaletteTab,
    pub search_query: String,
    pub expanded_sections: HashSet<String>,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self {
            tab: PaletteTab::default(),
            search_query: String::new(),
            expanded_sections: DEFAULT_EXPANDED_SECTIONS.iter().map(|id| (*id).to_owned()).collect(),
        }
    }
}

impl PaletteState {
    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expanded_sections.contains(section_id)
    }

    /// Flip membership of `section_id` in the expanded set.
    pub fn toggle_section(&mut self, section_id: &str) {
        if !self.expanded_sections.remove(section_id) {
            self.expanded_sections.insert(section_id.to_owned());
        }
    }

    /// Blocks-tab options matching the current search query.
    pub fn visible_blocks(&self) -> Vec<&'static BlockOption> {
        filter_blocks(BLOCK_OPTIONS, &self.search_query)
    }
}
