use super::*;
use crate::util::block_catalog::{SECTIONS, find_block_option};
use blocks::{BlockKind, PANEL_BLOCK_ITEM_TYPE};

#[test]
fn payload_carries_option_id_and_matching_block() {
    let option = find_block_option("contact-form").expect("contact form option");
    let payload = payload_for(option);
    assert_eq!(payload.item_type, PANEL_BLOCK_ITEM_TYPE);
    assert_eq!(payload.block_type, "contact-form");
    assert_eq!(payload.block_data.kind, BlockKind::ContactForm);
}

#[test]
fn section_spacer_payload_keeps_section_option_id() {
    let option = SECTIONS
        .iter()
        .flat_map(|s| s.blocks.iter())
        .find(|o| o.id == "hero-spacer")
        .expect("hero spacer option");
    let payload = payload_for(option);
    assert_eq!(payload.block_type, "hero-spacer");
    assert_eq!(payload.block_data.kind, BlockKind::SectionSpacer);
}

#[test]
fn each_drag_builds_a_new_block() {
    let option = find_block_option("hero").expect("hero option");
    assert_ne!(payload_for(option).block_data.id, payload_for(option).block_data.id);
}

#[test]
fn payload_survives_data_transfer_encoding() {
    let option = find_block_option("pricing").expect("pricing option");
    let payload = payload_for(option);
    let raw = blocks::encode_payload(&payload).expect("encode");
    assert_eq!(blocks::decode_payload(&raw).expect("decode"), payload);
}
