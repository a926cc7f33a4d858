//! Drag payload written by palette buttons and read by drop targets.
//!
//! The payload travels through the browser `DataTransfer` as a JSON string,
//! tagged with an item type so drop targets can ignore foreign drags.

#[cfg(test)]
#[path = "payload_test.rs"]
mod payload_test;

use serde::{Deserialize, Serialize};

use crate::LandingPageBlock;

/// Item type tag carried by every palette drag.
pub const PANEL_BLOCK_ITEM_TYPE: &str = "panel-block";

/// `DataTransfer` format the payload is stored under.
pub const DRAG_MIME_TYPE: &str = "application/json";

/// Error returned by [`decode_payload`] and [`encode_payload`].
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    /// The payload text is not valid JSON for a [`DragPayload`].
    #[error("invalid drag payload json: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload came from a drag source other than the block palette.
    #[error("unexpected drag item type: {0}")]
    UnexpectedItemType(String),
}

/// Data attached to a palette drag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    /// Always [`PANEL_BLOCK_ITEM_TYPE`] for palette drags.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Palette option id the drag started from (e.g. `"hero-spacer"`).
    pub block_type: String,
    /// Freshly constructed block to insert on drop.
    pub block_data: LandingPageBlock,
}

impl DragPayload {
    /// Payload for a palette drag of option `block_type`.
    #[must_use]
    pub fn panel_block(block_type: impl Into<String>, block_data: LandingPageBlock) -> Self {
        Self {
            item_type: PANEL_BLOCK_ITEM_TYPE.to_owned(),
            block_type: block_type.into(),
            block_data,
        }
    }
}

/// Serialize a payload for `DataTransfer::set_data`.
///
/// # Errors
///
/// Returns [`PayloadError::Json`] if serialization fails.
pub fn encode_payload(payload: &DragPayload) -> Result<String, PayloadError> {
    Ok(serde_json::to_string(payload)?)
}

/// Parse a payload read from `DataTransfer::get_data`.
///
/// # Errors
///
/// Returns [`PayloadError::Json`] for malformed text and
/// [`PayloadError::UnexpectedItemType`] when the item type tag is not
/// [`PANEL_BLOCK_ITEM_TYPE`].
pub fn decode_payload(raw: &str) -> Result<DragPayload, PayloadError> {
    let payload: DragPayload = serde_json::from_str(raw)?;
    if payload.item_type != PANEL_BLOCK_ITEM_TYPE {
        return Err(PayloadError::UnexpectedItemType(payload.item_type));
    }
    Ok(payload)
}
