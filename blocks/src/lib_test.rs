use super::*;

#[test]
fn block_kind_serializes_kebab_case() {
    assert_eq!(serde_json::to_value(BlockKind::ContactForm).expect("serialize"), serde_json::json!("contact-form"));
    assert_eq!(serde_json::to_value(BlockKind::SectionSpacer).expect("serialize"), serde_json::json!("section-spacer"));
    assert_eq!(serde_json::to_value(BlockKind::Faq).expect("serialize"), serde_json::json!("faq"));
}

#[test]
fn block_kind_as_str_matches_serde_name() {
    for kind in BlockKind::ALL {
        let value = serde_json::to_value(kind).expect("serialize");
        assert_eq!(value, serde_json::json!(kind.as_str()));
    }
}

#[test]
fn block_serializes_kind_under_type_key() {
    let block = LandingPageBlock::new(BlockKind::Quote, serde_json::json!({ "text": "hi" }));
    let value = serde_json::to_value(&block).expect("serialize");
    assert_eq!(value["type"], serde_json::json!("quote"));
    assert_eq!(value["props"]["text"], serde_json::json!("hi"));
    assert!(value.get("kind").is_none());
}

#[test]
fn block_new_generates_uuid_ids() {
    let a = LandingPageBlock::new(BlockKind::Paragraph, serde_json::json!({}));
    let b = LandingPageBlock::new(BlockKind::Paragraph, serde_json::json!({}));
    assert_ne!(a.id, b.id);
    assert!(uuid::Uuid::parse_str(&a.id).is_ok());
}

#[test]
fn block_deserializes_from_type_key() {
    let block: LandingPageBlock = serde_json::from_value(serde_json::json!({
        "id": "b-1",
        "type": "pricing-footer",
        "props": { "text": "trial" }
    }))
    .expect("deserialize");
    assert_eq!(block.kind, BlockKind::PricingFooter);
    assert_eq!(block.id, "b-1");
}
