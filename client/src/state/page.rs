//! Blocks placed on the page being built.
//!
//! SYSTEM CONTEXT
//! ==============
//! The builder page owns this list; the palette only ever appends to it via
//! the `on_add_block` callback, whether from a click or a drop.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use blocks::LandingPageBlock;

/// Ordered blocks on the current page.
#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub blocks: Vec<LandingPageBlock>,
}

impl PageState {
    /// Append `block` to the bottom of the page.
    pub fn append(&mut self, block: LandingPageBlock) {
        self.blocks.push(block);
    }
}

/// One-line caption for a placed block, taken from its most descriptive prop.
pub fn block_caption(block: &LandingPageBlock) -> String {
    const CAPTION_KEYS: [&str; 5] = ["headline", "heading", "text", "logoText", "companyName"];
    CAPTION_KEYS
        .iter()
        .find_map(|key| block.props.get(*key).and_then(serde_json::Value::as_str))
        .filter(|text| !text.is_empty())
        .map_or_else(|| block.kind.as_str().to_owned(), str::to_owned)
}
