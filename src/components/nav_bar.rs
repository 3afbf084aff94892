//! Top navigation bar: brand, layout selector, and the tool button group
//! with the panel lock toggle.

use leptos::prelude::*;

use crate::state::activity::{ActivityKind, ActivityState};
use crate::state::layouts::LayoutsState;
use crate::state::ui::{ToolFunction, UiState};

/// Tool definition for the navigation bar.
struct ToolDef {
    function: ToolFunction,
    label: &'static str,
    icon: &'static str,
}

const TOOLS: &[ToolDef] = &[
    ToolDef {
        function: ToolFunction::Refresh,
        label: "Refresh node addresses",
        icon: "bi bi-arrow-repeat",
    },
    ToolDef {
        function: ToolFunction::Config,
        label: "Upload node configuration",
        icon: "bi bi-gear-fill",
    },
    ToolDef {
        function: ToolFunction::Reset,
        label: "Reset nodes",
        icon: "bi bi-arrow-counterclockwise",
    },
    ToolDef {
        function: ToolFunction::Lock,
        label: "Lock panel",
        icon: "bi bi-unlock-fill",
    },
];

/// Navigation bar for the panel page.
///
/// The lock button flips `UiState.lock`; the selector's `disabled`
/// attribute, every non-lock tool's `disabled` class, and the lock glyph
/// itself all follow from that one state. Tool buttons are anchor-styled,
/// so every click handler suppresses the default navigation.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let layouts = expect_context::<RwSignal<LayoutsState>>();
    let activity = expect_context::<RwSignal<ActivityState>>();

    let on_select = move |ev: leptos::ev::Event| {
        let id = event_target_value(&ev);
        let mut changed = false;
        layouts.update(|l| changed = l.select(&id));
        if changed {
            activity.update(|a| a.push(ActivityKind::Selection, format!("layout {id} selected")));
        }
    };

    let buttons = TOOLS
        .iter()
        .map(|td| {
            let function = td.function;
            let label = td.label;
            let static_icon = td.icon;

            let icon = move || match function {
                ToolFunction::Lock => ui.get().lock.icon_class(),
                _ => static_icon,
            };
            let is_disabled = move || ui.get().tool_disabled(function);
            let on_click = move |ev: leptos::ev::MouseEvent| {
                // Anchor-styled button: never navigate.
                ev.prevent_default();
                match function {
                    ToolFunction::Lock => {
                        ui.update(|u| u.toggle_lock());
                        let message = if ui.get().lock.is_locked() {
                            "panel locked"
                        } else {
                            "panel unlocked"
                        };
                        activity
                            .update(|a| a.push(ActivityKind::Lock, message.to_owned()));
                    }
                    _ => {
                        if ui.get().tool_disabled(function) {
                            return;
                        }
                        let Some(layout_id) = layouts.get().selected_id else {
                            return;
                        };
                        activity.update(|a| {
                            a.push(
                                ActivityKind::Command,
                                format!(
                                    "{} command issued for layout {layout_id}",
                                    function.as_str()
                                ),
                            );
                        });
                    }
                }
            };

            view! {
                <a
                    href="#"
                    class="btn nav-tools__btn"
                    class:disabled=is_disabled
                    title=label
                    data-function=function.as_str()
                    on:click=on_click
                >
                    <i class=icon></i>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Signalbox"</span>
            <select
                id="layout-selector"
                class="nav-bar__selector"
                prop:value=move || layouts.get().selected_id.unwrap_or_default()
                disabled=move || ui.get().selector_disabled()
                on:change=on_select
            >
                {move || {
                    layouts
                        .get()
                        .items
                        .iter()
                        .map(|layout| {
                            let value = layout.id.clone();
                            let text = format!("{} - {}", layout.id, layout.description);
                            view! { <option value=value>{text}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>
            <span class="nav-bar__spacer"></span>
            <div class="nav-tools">{buttons}</div>
        </nav>
    }
}
