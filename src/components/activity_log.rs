//! Bottom panel listing panel actions, newest last.

use leptos::prelude::*;

use crate::state::activity::ActivityState;

/// Activity log panel.
#[component]
pub fn ActivityLog() -> impl IntoView {
    let activity = expect_context::<RwSignal<ActivityState>>();

    view! {
        <div class="activity-log">
            <span class="activity-log__title">"Log"</span>
            <div class="activity-log__lines">
                {move || {
                    let lines = activity.get().lines;
                    if lines.is_empty() {
                        return view! {
                            <div class="activity-log__empty">"No activity yet"</div>
                        }
                            .into_any();
                    }

                    lines
                        .iter()
                        .map(|line| {
                            let class = format!(
                                "activity-log__line activity-log__line--{}",
                                line.kind.as_str()
                            );
                            let seq = format!("#{}", line.seq);
                            let message = line.message.clone();
                            view! {
                                <div class=class>
                                    <span class="activity-log__seq">{seq}</span>
                                    <span class="activity-log__message">{message}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}
