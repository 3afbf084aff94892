//! Header strip naming the selected layout.

use leptos::prelude::*;

use crate::state::layouts::LayoutsState;

/// Banner showing the selected layout's id and description.
#[component]
pub fn LayoutBanner() -> impl IntoView {
    let layouts = expect_context::<RwSignal<LayoutsState>>();

    let layout_id = move || {
        layouts
            .get()
            .selected()
            .map_or_else(|| "-".to_owned(), |l| l.id.clone())
    };
    let description = move || {
        layouts
            .get()
            .selected()
            .map_or_else(|| "No layout loaded".to_owned(), |l| l.description.clone())
    };

    view! {
        <div class="layout-banner">
            <span class="layout-banner__label">"Layout"</span>
            <span class="layout-banner__id">{layout_id}</span>
            <span class="layout-banner__description">{description}</span>
        </div>
    }
}
