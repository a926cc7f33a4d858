use super::*;

fn all_factories() -> [(BlockKind, fn() -> LandingPageBlock); 16] {
    [
        (BlockKind::Header, header_block),
        (BlockKind::Hero, hero_block),
        (BlockKind::Features, features_block),
        (BlockKind::Testimonials, testimonials_block),
        (BlockKind::About, about_block),
        (BlockKind::ContactForm, contact_form_block),
        (BlockKind::Footer, footer_block),
        (BlockKind::SectionSpacer, section_spacer_block),
        (BlockKind::Pricing, pricing_block),
        (BlockKind::Faq, faq_block),
        (BlockKind::Signup, signup_block),
        (BlockKind::PricingFooter, pricing_footer_block),
        (BlockKind::Paragraph, paragraph_block),
        (BlockKind::RichText, rich_text_block),
        (BlockKind::Quote, quote_block),
        (BlockKind::Image, image_block),
    ]
}

#[test]
fn factories_produce_matching_kind_with_object_props() {
    for (kind, make) in all_factories() {
        let block = make();
        assert_eq!(block.kind, kind);
        assert!(block.props.is_object(), "{kind:?} props should be an object");
    }
}

#[test]
fn factories_produce_fresh_ids_per_call() {
    for (kind, make) in all_factories() {
        assert_ne!(make().id, make().id, "{kind:?} should not reuse ids");
    }
}

#[test]
fn heading_block_records_level() {
    let block = heading_block(HeadingLevel::H2);
    assert_eq!(block.kind, BlockKind::Heading);
    assert_eq!(block.props["level"], serde_json::json!("h2"));

    let block = heading_block(HeadingLevel::H4);
    assert_eq!(block.props["level"], serde_json::json!("h4"));
}

#[test]
fn heading_level_default_is_h2() {
    assert_eq!(HeadingLevel::default(), HeadingLevel::H2);
}

#[test]
fn contact_form_defaults_include_email_field() {
    let block = contact_form_block();
    let fields = block.props["fields"].as_array().expect("fields array");
    assert!(fields.iter().any(|f| f["kind"] == serde_json::json!("email")));
}

#[test]
fn spacer_defaults_to_fixed_height() {
    assert_eq!(section_spacer_block().props["height"], serde_json::json!(48));
}
