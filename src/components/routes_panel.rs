//! Table of the selected layout's requestable routes.

use leptos::prelude::*;

use crate::state::layouts::LayoutsState;

/// Routes panel: id and description of every route in the selected layout.
#[component]
pub fn RoutesPanel() -> impl IntoView {
    let layouts = expect_context::<RwSignal<LayoutsState>>();

    view! {
        <div class="routes-panel">
            <span class="routes-panel__title">"Routes"</span>
            <table class="routes-panel__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"DESCRIPTION"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = layouts.get();
                        state
                            .selected()
                            .map_or_else(Vec::new, |layout| {
                                layout
                                    .routes
                                    .iter()
                                    .map(|route| {
                                        let id = route.id;
                                        let description = route.description.clone();
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{description}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </tbody>
            </table>
        </div>
    }
}
