//! Browser drag-and-drop glue for palette drag sources and drop targets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Palette buttons write a [`DragPayload`] into the event `DataTransfer` on
//! `dragstart`; drop targets read it back on `drop`. DOM access is
//! hydrate-only; SSR builds keep the pure payload construction.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use blocks::DragPayload;

use crate::util::block_catalog::BlockOption;

/// Payload for a drag starting on `option`, carrying a freshly built block.
pub fn payload_for(option: &BlockOption) -> DragPayload {
    DragPayload::panel_block(option.id, option.create())
}

/// Attach the payload for `option` to a `dragstart` event.
#[cfg(feature = "hydrate")]
pub fn write_payload(ev: &web_sys::DragEvent, option: &BlockOption) {
    let Some(transfer) = ev.data_transfer() else {
        return;
    };
    match blocks::encode_payload(&payload_for(option)) {
        Ok(raw) => {
            if transfer.set_data(blocks::DRAG_MIME_TYPE, &raw).is_err() {
                log::warn!("drag payload for {} rejected by DataTransfer", option.id);
            }
            transfer.set_effect_allowed("copy");
        }
        Err(e) => log::warn!("failed to encode drag payload for {}: {e}", option.id),
    }
}

/// Read a palette payload from a `drop` event.
///
/// # Errors
///
/// Returns the decode error for missing, malformed, or foreign drag data.
#[cfg(feature = "hydrate")]
pub fn read_payload(ev: &web_sys::DragEvent) -> Result<DragPayload, blocks::PayloadError> {
    let raw = ev
        .data_transfer()
        .and_then(|transfer| transfer.get_data(blocks::DRAG_MIME_TYPE).ok())
        .unwrap_or_default();
    blocks::decode_payload(&raw)
}

/// Mark a `dragover` event as a copy so the browser allows the drop.
#[cfg(feature = "hydrate")]
pub fn accept_copy(ev: &web_sys::DragEvent) {
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_drop_effect("copy");
    }
}
