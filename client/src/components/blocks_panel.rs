//! Sidebar block palette with a searchable grid and a grouped section list.
//!
//! ARCHITECTURE
//! ============
//! The panel owns its `PaletteState` signal; nothing outside the palette reads
//! tab, search, or expansion state. The only outbound edge is `on_add_block`,
//! fired with a freshly built block on click (drops go through the host's
//! drop target, which decodes the drag payload and fires the same callback).

use leptos::prelude::*;

use blocks::LandingPageBlock;

use crate::components::block_button::BlockButton;
use crate::components::sections_panel::SectionsPanel;
use crate::state::palette::{PaletteState, PaletteTab};

/// Two-tab block palette.
#[component]
pub fn BlocksPanel(on_add_block: Callback<LandingPageBlock>) -> impl IntoView {
    let palette = RwSignal::new(PaletteState::default());

    let active_tab = move || palette.with(|p| p.tab);
    let select_tab = move |tab: PaletteTab| palette.update(|p| p.tab = tab);

    let visible_blocks = move || {
        palette
            .with(|p| p.visible_blocks())
            .into_iter()
            .map(|option| view! { <BlockButton option=option on_add_block=on_add_block/> })
            .collect::<Vec<_>>()
    };

    view! {
        <div class="blocks-panel">
            <div class="blocks-panel__tabs" role="tablist">
                <button
                    class="blocks-panel__tab"
                    class:blocks-panel__tab--active=move || active_tab() == PaletteTab::Blocks
                    role="tab"
                    on:click=move |_| select_tab(PaletteTab::Blocks)
                >
                    "Blocks"
                </button>
                <button
                    class="blocks-panel__tab"
                    class:blocks-panel__tab--active=move || active_tab() == PaletteTab::Sections
                    role="tab"
                    on:click=move |_| select_tab(PaletteTab::Sections)
                >
                    "Sections"
                </button>
            </div>

            {move || match active_tab() {
                PaletteTab::Blocks => view! {
                    <div class="blocks-panel__content">
                        <div class="blocks-panel__search">
                            <input
                                class="blocks-panel__search-input"
                                type="search"
                                placeholder="Search blocks..."
                                prop:value=move || palette.with(|p| p.search_query.clone())
                                on:input=move |ev| {
                                    let query = event_target_value(&ev);
                                    palette.update(|p| p.search_query = query);
                                }
                            />
                        </div>
                        <div class="blocks-panel__scroll">
                            <Show
                                when=move || palette.with(|p| !p.visible_blocks().is_empty())
                                fallback=|| view! { <div class="blocks-panel__empty">"No blocks match your search."</div> }
                            >
                                <div class="block-grid">{visible_blocks}</div>
                            </Show>
                        </div>
                    </div>
                }
                .into_any(),
                PaletteTab::Sections => view! {
                    <div class="blocks-panel__content blocks-panel__scroll">
                        <SectionsPanel palette=palette on_add_block=on_add_block/>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
