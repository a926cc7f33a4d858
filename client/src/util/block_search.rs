//! Case-insensitive search over palette options.

#[cfg(test)]
#[path = "block_search_test.rs"]
mod block_search_test;

use crate::util::block_catalog::BlockOption;

/// Whether `option` label or description contains `query`, ignoring case.
///
/// An empty query matches every option.
pub fn matches_query(option: &BlockOption, query: &str) -> bool {
    let needle = query.to_lowercase();
    option.label.to_lowercase().contains(&needle) || option.description.to_lowercase().contains(&needle)
}

/// Options matching `query`, in catalog order.
pub fn filter_blocks(options: &'static [BlockOption], query: &str) -> Vec<&'static BlockOption> {
    options.iter().filter(|option| matches_query(option, query)).collect()
}
