use std::collections::HashSet;

use super::*;
use blocks::BlockKind;

fn expected_kind(option_id: &str) -> BlockKind {
    match option_id {
        "hero" => BlockKind::Hero,
        "header" => BlockKind::Header,
        "heading" => BlockKind::Heading,
        "paragraph" => BlockKind::Paragraph,
        "rich-text" => BlockKind::RichText,
        "quote" => BlockKind::Quote,
        "about" => BlockKind::About,
        "image" => BlockKind::Image,
        "features" => BlockKind::Features,
        "testimonials" => BlockKind::Testimonials,
        "contact-form" => BlockKind::ContactForm,
        "signup" => BlockKind::Signup,
        "pricing" => BlockKind::Pricing,
        "pricing-footer" => BlockKind::PricingFooter,
        "faq" => BlockKind::Faq,
        "footer" => BlockKind::Footer,
        "spacer" | "hero-spacer" => BlockKind::SectionSpacer,
        other => panic!("unmapped option id {other}"),
    }
}

// =============================================================
// Catalog shape
// =============================================================

#[test]
fn block_options_keep_palette_order() {
    let ids = BLOCK_OPTIONS.iter().map(|o| o.id).collect::<Vec<_>>();
    assert_eq!(
        ids,
        vec![
            "hero",
            "header",
            "heading",
            "paragraph",
            "features",
            "testimonials",
            "contact-form",
            "signup",
            "pricing",
            "faq",
            "footer",
            "spacer"
        ]
    );
}

#[test]
fn block_option_ids_are_unique() {
    let ids = BLOCK_OPTIONS.iter().map(|o| o.id).collect::<HashSet<_>>();
    assert_eq!(ids.len(), BLOCK_OPTIONS.len());
}

#[test]
fn section_ids_are_unique_and_options_unique_within_section() {
    let section_ids = SECTIONS.iter().map(|s| s.id).collect::<HashSet<_>>();
    assert_eq!(section_ids.len(), SECTIONS.len());

    for section in SECTIONS {
        let ids = section.blocks.iter().map(|o| o.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), section.blocks.len(), "duplicate option in {}", section.id);
        assert!(!section.blocks.is_empty(), "empty section {}", section.id);
    }
}

#[test]
fn sections_keep_display_order_and_titles() {
    let pairs = SECTIONS.iter().map(|s| (s.id, s.title)).collect::<Vec<_>>();
    assert_eq!(pairs.len(), 11);
    assert_eq!(pairs[0], ("hero", "Hero Section"));
    assert_eq!(pairs[1], ("headers", "Headers & Navigation"));
    assert_eq!(pairs[6], ("testimonials", "Testimonials & Social Proof"));
    assert_eq!(pairs[10], ("footer", "Footer"));
}

#[test]
fn default_expanded_sections_exist_and_skip_pricing_and_faq() {
    for id in DEFAULT_EXPANDED_SECTIONS {
        assert!(SECTIONS.iter().any(|s| s.id == *id), "unknown default section {id}");
    }
    assert!(!DEFAULT_EXPANDED_SECTIONS.contains(&"pricing"));
    assert!(!DEFAULT_EXPANDED_SECTIONS.contains(&"faq"));
}

// =============================================================
// Factories
// =============================================================

#[test]
fn every_option_builds_block_of_matching_kind() {
    let all = BLOCK_OPTIONS.iter().chain(SECTIONS.iter().flat_map(|s| s.blocks.iter()));
    for option in all {
        assert_eq!(option.create().kind, expected_kind(option.id), "option {}", option.id);
    }
}

#[test]
fn heading_option_builds_h2() {
    let option = find_block_option("heading").expect("heading option");
    assert_eq!(option.create().props["level"], serde_json::json!("h2"));
}

#[test]
fn find_block_option_returns_none_for_unknown_id() {
    assert!(find_block_option("carousel").is_none());
    assert_eq!(find_block_option("faq").map(|o| o.label), Some("FAQ"));
}

// =============================================================
// Click activation
// =============================================================

#[test]
fn add_block_invokes_callback_once_with_fresh_block_of_option_type() {
    let option = find_block_option("contact-form").expect("contact form option");
    let mut received = Vec::new();
    add_block(option, |block| received.push(block));

    assert_eq!(received.len(), 1);
    assert_eq!(received[0].kind, BlockKind::ContactForm);
    assert!(uuid::Uuid::parse_str(&received[0].id).is_ok());
}

#[test]
fn add_block_builds_new_block_on_each_click() {
    let option = find_block_option("hero").expect("hero option");
    let mut ids = Vec::new();
    add_block(option, |block| ids.push(block.id));
    add_block(option, |block| ids.push(block.id));
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1]);
}
