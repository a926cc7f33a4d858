//! Sections tab: palette options grouped under collapsible headers.

use leptos::prelude::*;

use blocks::LandingPageBlock;

use crate::components::block_button::BlockButton;
use crate::components::block_icon::render_chevron_icon;
use crate::state::palette::PaletteState;
use crate::util::block_catalog::SECTIONS;

/// Collapsible section list sharing the palette's expanded-section set.
#[component]
pub fn SectionsPanel(palette: RwSignal<PaletteState>, on_add_block: Callback<LandingPageBlock>) -> impl IntoView {
    let sections = SECTIONS
        .iter()
        .map(|section| {
            let section_id = section.id;
            let expanded = move || palette.with(|p| p.is_expanded(section_id));
            let on_toggle = move |_ev: leptos::ev::MouseEvent| {
                palette.update(|p| p.toggle_section(section_id));
            };
            let buttons = move || {
                section
                    .blocks
                    .iter()
                    .map(|option| view! { <BlockButton option=option on_add_block=on_add_block/> })
                    .collect::<Vec<_>>()
            };

            view! {
                <div class="sections-panel__section">
                    <button
                        class="sections-panel__header"
                        aria-expanded=move || if expanded() { "true" } else { "false" }
                        on:click=on_toggle
                    >
                        <span class="sections-panel__title">{section.title}</span>
                        <span class="sections-panel__chevron" class:sections-panel__chevron--open=expanded>
                            {render_chevron_icon()}
                        </span>
                    </button>
                    <Show when=expanded>
                        <div class="sections-panel__body">
                            <div class="block-grid">{buttons}</div>
                        </div>
                    </Show>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="sections-panel">{sections}</div> }
}
