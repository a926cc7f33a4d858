//! Builder page — palette sidebar beside the page canvas.
//!
//! ARCHITECTURE
//! ============
//! The page owns the single `on_add_block` callback shared by palette clicks
//! and canvas drops, so both insertion paths update `PageState` identically.

use leptos::prelude::*;

use blocks::LandingPageBlock;

use crate::components::blocks_panel::BlocksPanel;
use crate::components::page_canvas::PageCanvas;
use crate::state::page::PageState;

/// Landing-page builder workspace.
#[component]
pub fn BuilderPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageState>>();

    let on_add_block = Callback::new(move |block: LandingPageBlock| {
        #[cfg(feature = "hydrate")]
        {
            log::debug!("adding {} block {}", block.kind.as_str(), block.id);
        }
        page.update(|p| p.append(block));
    });

    view! {
        <div class="builder-page">
            <aside class="builder-page__palette">
                <BlocksPanel on_add_block=on_add_block/>
            </aside>
            <main class="builder-page__canvas">
                <PageCanvas on_add_block=on_add_block/>
            </main>
        </div>
    }
}
