//! Drop target listing the blocks placed on the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accepts palette drags by decoding the `DataTransfer` payload written at
//! `dragstart`; foreign or malformed drops are ignored.

use leptos::prelude::*;

use blocks::LandingPageBlock;

use crate::state::page::{PageState, block_caption};

/// Page canvas: ordered block list plus drop zone.
#[component]
pub fn PageCanvas(on_add_block: Callback<LandingPageBlock>) -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();
    let drag_over = RwSignal::new(false);

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            crate::util::drag::accept_copy(&ev);
        }
        drag_over.set(true);
    };

    let on_drag_leave = move |_ev: leptos::ev::DragEvent| {
        drag_over.set(false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        #[cfg(feature = "hydrate")]
        {
            match crate::util::drag::read_payload(&ev) {
                Ok(payload) => {
                    log::debug!("palette drop: {}", payload.block_type);
                    on_add_block.run(payload.block_data);
                }
                Err(e) => log::warn!("ignoring drop: {e}"),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_add_block;
        }
    };

    let rows = move || {
        page.get()
            .blocks
            .into_iter()
            .map(|block| {
                let caption = block_caption(&block);
                view! {
                    <li class="page-canvas__block" attr:data-block-id=block.id>
                        <span class="page-canvas__kind">{block.kind.as_str()}</span>
                        <span class="page-canvas__caption">{caption}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div
            class="page-canvas"
            class:page-canvas--drag-over=move || drag_over.get()
            on:dragover=on_drag_over
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <Show
                when=move || !page.with(|p| p.blocks.is_empty())
                fallback=|| view! { <div class="page-canvas__empty">"Click or drag a block to start building."</div> }
            >
                <ol class="page-canvas__blocks">{rows}</ol>
            </Show>
        </div>
    }
}
