//! Block factories with per-kind default content.
//!
//! Every factory returns a brand-new block with its own id, so callers can
//! insert the result directly without cloning or re-keying.

#[cfg(test)]
#[path = "factory_test.rs"]
mod factory_test;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{BlockKind, LandingPageBlock};

/// HTML heading level for [`heading_block`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    #[default]
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::H4 => "h4",
            Self::H5 => "h5",
            Self::H6 => "h6",
        }
    }
}

#[must_use]
pub fn header_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Header,
        json!({
            "logoText": "Your Brand",
            "links": [
                { "label": "Features", "href": "#features" },
                { "label": "Pricing", "href": "#pricing" },
                { "label": "Contact", "href": "#contact" }
            ],
            "ctaLabel": "Get Started",
            "ctaHref": "#signup",
            "sticky": true
        }),
    )
}

#[must_use]
pub fn hero_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Hero,
        json!({
            "headline": "Build pages your customers remember",
            "subheadline": "Launch a polished landing page in minutes, no code required.",
            "ctaLabel": "Start free trial",
            "ctaHref": "#signup",
            "backgroundColor": "#FFF7ED",
            "textColor": "#1F1A17",
            "align": "center",
            "minHeight": 480
        }),
    )
}

#[must_use]
pub fn features_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Features,
        json!({
            "heading": "Everything you need",
            "columns": 3,
            "items": [
                { "icon": "zap", "title": "Fast", "description": "Pages load in the blink of an eye." },
                { "icon": "layout", "title": "Flexible", "description": "Rearrange sections with drag and drop." },
                { "icon": "share", "title": "Shareable", "description": "Publish and share with one click." }
            ]
        }),
    )
}

#[must_use]
pub fn testimonials_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Testimonials,
        json!({
            "heading": "What our customers say",
            "items": [
                { "quote": "We shipped our launch page in an afternoon.", "author": "Alex Morgan", "role": "Marketing Lead" },
                { "quote": "Conversion went up the week we switched.", "author": "Sam Rivera", "role": "Founder" }
            ]
        }),
    )
}

#[must_use]
pub fn about_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::About,
        json!({
            "heading": "About us",
            "body": "Tell visitors who you are, what you do, and why it matters.",
            "imageUrl": ""
        }),
    )
}

#[must_use]
pub fn contact_form_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::ContactForm,
        json!({
            "heading": "Get in touch",
            "description": "We usually reply within one business day.",
            "fields": [
                { "name": "name", "label": "Name", "kind": "text", "required": true },
                { "name": "email", "label": "Email", "kind": "email", "required": true },
                { "name": "message", "label": "Message", "kind": "textarea", "required": false }
            ],
            "submitLabel": "Send message"
        }),
    )
}

#[must_use]
pub fn footer_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Footer,
        json!({
            "companyName": "Your Brand",
            "copyright": "All rights reserved.",
            "links": [
                { "label": "Privacy", "href": "#privacy" },
                { "label": "Terms", "href": "#terms" }
            ],
            "backgroundColor": "#1F1A17",
            "textColor": "#FFFFFF"
        }),
    )
}

#[must_use]
pub fn section_spacer_block() -> LandingPageBlock {
    LandingPageBlock::new(BlockKind::SectionSpacer, json!({ "height": 48 }))
}

#[must_use]
pub fn pricing_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Pricing,
        json!({
            "heading": "Simple pricing",
            "plans": [
                { "name": "Starter", "price": "$0", "period": "month", "features": ["1 page", "Basic blocks"], "highlighted": false },
                { "name": "Pro", "price": "$29", "period": "month", "features": ["Unlimited pages", "All blocks", "Custom domain"], "highlighted": true },
                { "name": "Team", "price": "$79", "period": "month", "features": ["Everything in Pro", "5 seats"], "highlighted": false }
            ]
        }),
    )
}

#[must_use]
pub fn faq_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Faq,
        json!({
            "heading": "Frequently asked questions",
            "items": [
                { "question": "Can I cancel anytime?", "answer": "Yes. Plans are billed monthly and can be cancelled at any time." },
                { "question": "Do I need to know how to code?", "answer": "No. Every block is editable from the builder." }
            ]
        }),
    )
}

#[must_use]
pub fn signup_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Signup,
        json!({
            "heading": "Stay in the loop",
            "description": "Get product updates straight to your inbox.",
            "placeholder": "you@example.com",
            "buttonLabel": "Subscribe"
        }),
    )
}

#[must_use]
pub fn pricing_footer_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::PricingFooter,
        json!({
            "text": "All plans include a 14-day free trial.",
            "linkLabel": "Compare plans",
            "linkHref": "#pricing"
        }),
    )
}

#[must_use]
pub fn heading_block(level: HeadingLevel) -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Heading,
        json!({
            "text": "Section heading",
            "level": level.as_str(),
            "align": "left"
        }),
    )
}

#[must_use]
pub fn paragraph_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Paragraph,
        json!({
            "text": "Write a few sentences that explain this part of the page.",
            "align": "left"
        }),
    )
}

#[must_use]
pub fn rich_text_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::RichText,
        json!({ "html": "<p>Start typing. <strong>Bold</strong>, <em>italic</em>, and links are supported.</p>" }),
    )
}

#[must_use]
pub fn quote_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Quote,
        json!({
            "text": "Design is not just what it looks like. Design is how it works.",
            "author": "Steve Jobs"
        }),
    )
}

#[must_use]
pub fn image_block() -> LandingPageBlock {
    LandingPageBlock::new(
        BlockKind::Image,
        json!({
            "src": "",
            "alt": "",
            "width": "100%",
            "align": "center"
        }),
    )
}
