//! Shared landing-page block model, block factories, and drag payload codec.
//!
//! This crate owns the block representation used by both the palette UI and
//! any drop target that accepts palette drags. Block properties stay flexible
//! (`serde_json::Value`) so each block kind can carry its own defaults without
//! a schema per kind.

pub mod factory;
pub mod payload;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use factory::*;
pub use payload::{DRAG_MIME_TYPE, DragPayload, PANEL_BLOCK_ITEM_TYPE, PayloadError, decode_payload, encode_payload};

/// Kind of content section a block renders as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Header,
    Hero,
    Features,
    Testimonials,
    About,
    ContactForm,
    Footer,
    SectionSpacer,
    Pricing,
    Faq,
    Signup,
    PricingFooter,
    Heading,
    Paragraph,
    RichText,
    Quote,
    Image,
}

impl BlockKind {
    /// Every block kind, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::Header,
        Self::Hero,
        Self::Features,
        Self::Testimonials,
        Self::About,
        Self::ContactForm,
        Self::Footer,
        Self::SectionSpacer,
        Self::Pricing,
        Self::Faq,
        Self::Signup,
        Self::PricingFooter,
        Self::Heading,
        Self::Paragraph,
        Self::RichText,
        Self::Quote,
        Self::Image,
    ];

    /// Serialized kebab-case name, e.g. `"contact-form"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::Features => "features",
            Self::Testimonials => "testimonials",
            Self::About => "about",
            Self::ContactForm => "contact-form",
            Self::Footer => "footer",
            Self::SectionSpacer => "section-spacer",
            Self::Pricing => "pricing",
            Self::Faq => "faq",
            Self::Signup => "signup",
            Self::PricingFooter => "pricing-footer",
            Self::Heading => "heading",
            Self::Paragraph => "paragraph",
            Self::RichText => "rich-text",
            Self::Quote => "quote",
            Self::Image => "image",
        }
    }
}

/// A content section placeable on a landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandingPageBlock {
    /// Unique block identifier (UUID string), fresh per construction.
    pub id: String,
    /// Block kind.
    #[serde(rename = "type")]
    pub kind: BlockKind,
    /// Open-ended per-kind properties (copy, links, colors, sizes).
    pub props: Value,
}

impl LandingPageBlock {
    /// Build a block of `kind` with a newly generated id.
    #[must_use]
    pub fn new(kind: BlockKind, props: Value) -> Self {
        Self { id: uuid::Uuid::new_v4().to_string(), kind, props }
    }
}
