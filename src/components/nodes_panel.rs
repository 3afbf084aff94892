//! Table of the selected layout's track-side nodes.

use leptos::prelude::*;

use crate::state::layouts::LayoutsState;

/// Nodes panel: id, MAC, and IP of every node in the selected layout.
#[component]
pub fn NodesPanel() -> impl IntoView {
    let layouts = expect_context::<RwSignal<LayoutsState>>();

    view! {
        <div class="nodes-panel">
            <span class="nodes-panel__title">"Nodes"</span>
            <table class="nodes-panel__table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"MAC"</th>
                        <th>"IP"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = layouts.get();
                        state
                            .selected()
                            .map_or_else(Vec::new, |layout| {
                                layout
                                    .nodes
                                    .iter()
                                    .map(|node| {
                                        let id = node.id.clone();
                                        let mac = node.mac.clone();
                                        let ip = node.ip.clone();
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{mac}</td>
                                                <td>{ip}</td>
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
