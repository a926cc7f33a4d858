//! Inline SVG glyphs for palette buttons.

use leptos::prelude::*;

use crate::util::block_catalog::BlockIcon;

pub fn render_block_icon(icon: BlockIcon) -> impl IntoView {
    match icon {
        BlockIcon::Image => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2" y="3" width="16" height="14" />
                <circle cx="7" cy="8" r="1.5" />
                <path d="M2 15 L7 11 L11 14 L14 12 L18 15" />
            </svg>
        }
        .into_any(),
        BlockIcon::Menu => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <line x1="3" y1="5" x2="17" y2="5" />
                <line x1="3" y1="10" x2="17" y2="10" />
                <line x1="3" y1="15" x2="17" y2="15" />
            </svg>
        }
        .into_any(),
        BlockIcon::Type => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M4 6 V4 H16 V6" />
                <line x1="10" y1="4" x2="10" y2="16" />
                <line x1="7" y1="16" x2="13" y2="16" />
            </svg>
        }
        .into_any(),
        BlockIcon::FileText => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M5 2 H12 L16 6 V18 H5 Z" />
                <path d="M12 2 V6 H16" />
                <line x1="7.5" y1="10" x2="13.5" y2="10" />
                <line x1="7.5" y1="13" x2="13.5" y2="13" />
            </svg>
        }
        .into_any(),
        BlockIcon::Grid => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="3" y="3" width="6" height="6" />
                <rect x="11" y="3" width="6" height="6" />
                <rect x="3" y="11" width="6" height="6" />
                <rect x="11" y="11" width="6" height="6" />
            </svg>
        }
        .into_any(),
        BlockIcon::Users => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="7" cy="7" r="2.5" />
                <circle cx="13.5" cy="8" r="2" />
                <path d="M2.5 16 C3.5 12.8 5.5 11.5 7.5 11.5 C9.5 11.5 11.6 12.8 12.5 16" />
                <path d="M11 16 C11.7 13.8 13 12.8 14.5 12.8 C16 12.8 17.2 13.8 18 16" />
            </svg>
        }
        .into_any(),
        BlockIcon::Phone => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M4 3 H7 L8.5 7 L6.5 8.5 C7.5 10.5 9.5 12.5 11.5 13.5 L13 11.5 L17 13 V16 C17 16.6 16.6 17 16 17 C9 17 3 11 3 4 C3 3.4 3.4 3 4 3 Z" />
            </svg>
        }
        .into_any(),
        BlockIcon::Mail => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="2" y="4" width="16" height="12" />
                <path d="M2 5 L10 11 L18 5" />
            </svg>
        }
        .into_any(),
        BlockIcon::TrendingUp => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <polyline points="2,15 8,9 11,12 18,5" />
                <polyline points="13,5 18,5 18,10" />
            </svg>
        }
        .into_any(),
        BlockIcon::HelpCircle => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="8" />
                <path d="M7.5 7.5 C7.5 6 8.6 5 10 5 C11.4 5 12.5 6 12.5 7.3 C12.5 9.2 10 9.3 10 11.5" />
                <line x1="10" y1="14" x2="10" y2="14.5" />
            </svg>
        }
        .into_any(),
        BlockIcon::Layers => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <path d="M10 2 L18 6 L10 10 L2 6 Z" />
                <path d="M2 10 L10 14 L18 10" />
                <path d="M2 14 L10 18 L18 14" />
            </svg>
        }
        .into_any(),
        BlockIcon::MessageSquare => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <rect x="3" y="3" width="14" height="10" />
                <path d="M7 13 L7 17 L11 13" />
            </svg>
        }
        .into_any(),
        BlockIcon::Settings => view! {
            <svg viewBox="0 0 20 20" aria-hidden="true">
                <circle cx="10" cy="10" r="2.5" />
                <path d="M10 2 V4.5 M10 15.5 V18 M2 10 H4.5 M15.5 10 H18 M4.3 4.3 L6.1 6.1 M13.9 13.9 L15.7 15.7 M4.3 15.7 L6.1 13.9 M13.9 6.1 L15.7 4.3" />
            </svg>
        }
        .into_any(),
    }
}

pub fn render_grip_icon() -> impl IntoView {
    view! {
        <svg class="block-button__grip" viewBox="0 0 20 20" aria-hidden="true">
            <circle cx="6" cy="8" r="1" />
            <circle cx="10" cy="8" r="1" />
            <circle cx="14" cy="8" r="1" />
            <circle cx="6" cy="12" r="1" />
            <circle cx="10" cy="12" r="1" />
            <circle cx="14" cy="12" r="1" />
        </svg>
    }
}

pub fn render_chevron_icon() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" aria-hidden="true">
            <polyline points="5,8 10,13 15,8" />
        </svg>
    }
}
