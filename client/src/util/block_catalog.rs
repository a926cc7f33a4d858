//! Static catalog of palette block options and their section grouping.
//!
//! DESIGN
//! ======
//! Options pair display metadata with a plain `fn` factory so the catalog can
//! live in `const` tables and every click or drag builds a fresh block.

#[cfg(test)]
#[path = "block_catalog_test.rs"]
mod block_catalog_test;

use blocks::{HeadingLevel, LandingPageBlock};

/// Glyph drawn on a palette button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockIcon {
    Image,
    Menu,
    Type,
    FileText,
    Grid,
    Users,
    Phone,
    Mail,
    TrendingUp,
    HelpCircle,
    Layers,
    MessageSquare,
    Settings,
}

/// One entry in the palette.
#[derive(Clone, Copy, Debug)]
pub struct BlockOption {
    pub id: &'static str,
    pub icon: BlockIcon,
    pub label: &'static str,
    pub description: &'static str,
    pub create: fn() -> LandingPageBlock,
}

impl BlockOption {
    /// Build a fresh block for this option.
    pub fn create(&self) -> LandingPageBlock {
        (self.create)()
    }
}

/// A titled group of options in the Sections tab.
#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub blocks: &'static [BlockOption],
}

fn heading_h2() -> LandingPageBlock {
    blocks::heading_block(HeadingLevel::H2)
}

/// Flat list shown (and searched) in the Blocks tab.
pub const BLOCK_OPTIONS: &[BlockOption] = &[
    BlockOption { id: "hero", icon: BlockIcon::Image, label: "Hero", description: "Large hero section", create: blocks::hero_block },
    BlockOption { id: "header", icon: BlockIcon::Menu, label: "Header", description: "Navigation header", create: blocks::header_block },
    BlockOption { id: "heading", icon: BlockIcon::Type, label: "Heading", description: "Section heading", create: heading_h2 },
    BlockOption { id: "paragraph", icon: BlockIcon::FileText, label: "Paragraph", description: "Text content", create: blocks::paragraph_block },
    BlockOption { id: "features", icon: BlockIcon::Grid, label: "Features", description: "Feature grid", create: blocks::features_block },
    BlockOption { id: "testimonials", icon: BlockIcon::Users, label: "Testimonials", description: "Customer testimonials", create: blocks::testimonials_block },
    BlockOption { id: "contact-form", icon: BlockIcon::Phone, label: "Contact Form", description: "Contact form", create: blocks::contact_form_block },
    BlockOption { id: "signup", icon: BlockIcon::Mail, label: "Signup", description: "Newsletter signup", create: blocks::signup_block },
    BlockOption { id: "pricing", icon: BlockIcon::TrendingUp, label: "Pricing", description: "Pricing plans", create: blocks::pricing_block },
    BlockOption { id: "faq", icon: BlockIcon::HelpCircle, label: "FAQ", description: "FAQ section", create: blocks::faq_block },
    BlockOption { id: "footer", icon: BlockIcon::Layers, label: "Footer", description: "Page footer", create: blocks::footer_block },
    BlockOption { id: "spacer", icon: BlockIcon::Layers, label: "Spacer", description: "Vertical spacing", create: blocks::section_spacer_block },
];

const HERO_SECTION: &[BlockOption] = &[
    BlockOption { id: "hero", icon: BlockIcon::Image, label: "Hero", description: "Large hero section with headline and CTA", create: blocks::hero_block },
    BlockOption { id: "hero-spacer", icon: BlockIcon::Layers, label: "Spacer", description: "Add vertical spacing", create: blocks::section_spacer_block },
];

const HEADER_SECTION: &[BlockOption] = &[
    BlockOption { id: "header", icon: BlockIcon::Menu, label: "Header", description: "Navigation bar with logo and links", create: blocks::header_block },
];

const CONTENT_SECTION: &[BlockOption] = &[
    BlockOption { id: "heading", icon: BlockIcon::Type, label: "Heading", description: "Section headline", create: heading_h2 },
    BlockOption { id: "paragraph", icon: BlockIcon::FileText, label: "Paragraph", description: "Body text content", create: blocks::paragraph_block },
    BlockOption { id: "rich-text", icon: BlockIcon::Type, label: "Rich Text", description: "Formatted text block", create: blocks::rich_text_block },
    BlockOption { id: "quote", icon: BlockIcon::MessageSquare, label: "Quote", description: "Highlighted quote", create: blocks::quote_block },
    BlockOption { id: "about", icon: BlockIcon::FileText, label: "About", description: "About section", create: blocks::about_block },
];

const MEDIA_SECTION: &[BlockOption] = &[
    BlockOption { id: "image", icon: BlockIcon::Image, label: "Image", description: "Add an image", create: blocks::image_block },
];

const CTA_SECTION: &[BlockOption] = &[
    BlockOption { id: "signup", icon: BlockIcon::Mail, label: "Signup", description: "Newsletter signup form", create: blocks::signup_block },
];

const FEATURES_SECTION: &[BlockOption] = &[
    BlockOption { id: "features", icon: BlockIcon::Grid, label: "Features", description: "Feature grid section", create: blocks::features_block },
];

const TESTIMONIALS_SECTION: &[BlockOption] = &[
    BlockOption { id: "testimonials", icon: BlockIcon::Users, label: "Testimonials", description: "Customer testimonials", create: blocks::testimonials_block },
];

const FORMS_SECTION: &[BlockOption] = &[
    BlockOption { id: "contact-form", icon: BlockIcon::Phone, label: "Contact Form", description: "Contact form section", create: blocks::contact_form_block },
];

const PRICING_SECTION: &[BlockOption] = &[
    BlockOption { id: "pricing", icon: BlockIcon::TrendingUp, label: "Pricing", description: "Pricing plans section", create: blocks::pricing_block },
    BlockOption { id: "pricing-footer", icon: BlockIcon::Settings, label: "Pricing Footer", description: "Pricing footer", create: blocks::pricing_footer_block },
];

const FAQ_SECTION: &[BlockOption] = &[
    BlockOption { id: "faq", icon: BlockIcon::HelpCircle, label: "FAQ", description: "Frequently asked questions", create: blocks::faq_block },
];

const FOOTER_SECTION: &[BlockOption] = &[
    BlockOption { id: "footer", icon: BlockIcon::Layers, label: "Footer", description: "Page footer", create: blocks::footer_block },
];

/// Grouped list shown in the Sections tab, in display order.
pub const SECTIONS: &[Section] = &[
    Section { id: "hero", title: "Hero Section", blocks: HERO_SECTION },
    Section { id: "headers", title: "Headers & Navigation", blocks: HEADER_SECTION },
    Section { id: "content", title: "Text & Content", blocks: CONTENT_SECTION },
    Section { id: "media", title: "Images & Media", blocks: MEDIA_SECTION },
    Section { id: "cta", title: "Call to Action", blocks: CTA_SECTION },
    Section { id: "features", title: "Features", blocks: FEATURES_SECTION },
    Section { id: "testimonials", title: "Testimonials & Social Proof", blocks: TESTIMONIALS_SECTION },
    Section { id: "forms", title: "Forms", blocks: FORMS_SECTION },
    Section { id: "pricing", title: "Pricing", blocks: PRICING_SECTION },
    Section { id: "faq", title: "FAQ", blocks: FAQ_SECTION },
    Section { id: "footer", title: "Footer", blocks: FOOTER_SECTION },
];

/// Sections open when the palette mounts. Pricing and FAQ start collapsed.
pub const DEFAULT_EXPANDED_SECTIONS: &[&str] =
    &["hero", "headers", "content", "media", "cta", "features", "testimonials", "forms", "footer"];

/// Look up a Blocks-tab option by id.
pub fn find_block_option(id: &str) -> Option<&'static BlockOption> {
    BLOCK_OPTIONS.iter().find(|option| option.id == id)
}

/// Build a fresh block for `option` and hand it to `on_add` exactly once.
pub fn add_block(option: &BlockOption, mut on_add: impl FnMut(LandingPageBlock)) {
    on_add(option.create());
}
