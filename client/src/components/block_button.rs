//! Palette button that adds a block on click and acts as a drag source.
//!
//! DESIGN
//! ======
//! Click and drag both call the option factory at the moment of use, so two
//! insertions of the same option never share a block id.

use leptos::prelude::*;

use blocks::LandingPageBlock;

use crate::components::block_icon::{render_block_icon, render_grip_icon};
use crate::util::block_catalog::{BlockOption, add_block};

/// Draggable palette entry for one block option.
#[component]
pub fn BlockButton(option: &'static BlockOption, on_add_block: Callback<LandingPageBlock>) -> impl IntoView {
    let dragging = RwSignal::new(false);

    let on_click = move |_ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("palette click: {}", option.id);
        }
        add_block(option, |block| on_add_block.run(block));
    };

    let on_drag_start = move |ev: leptos::ev::DragEvent| {
        dragging.set(true);
        #[cfg(feature = "hydrate")]
        {
            log::debug!("palette drag start: {}", option.id);
            crate::util::drag::write_payload(&ev, option);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_drag_end = move |_ev: leptos::ev::DragEvent| {
        dragging.set(false);
    };

    view! {
        <button
            class="block-button"
            class:block-button--dragging=move || dragging.get()
            title=option.description
            draggable="true"
            on:click=on_click
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
        >
            <div class="block-button__icon">
                {render_grip_icon()}
                {render_block_icon(option.icon)}
            </div>
            <span class="block-button__label">{option.label}</span>
        </button>
    }
}
