//! Panel page: the main control surface layout.

use leptos::prelude::*;

use crate::components::activity_log::ActivityLog;
use crate::components::layout_banner::LayoutBanner;
use crate::components::nav_bar::NavBar;
use crate::components::nodes_panel::NodesPanel;
use crate::components::routes_panel::RoutesPanel;

/// Panel page. Composes nav bar, layout banner, nodes and routes panels,
/// and the activity log in a CSS grid layout.
#[component]
pub fn PanelPage() -> impl IntoView {
    view! {
        <div class="panel-page">
            <div class="panel-page__nav">
                <NavBar/>
            </div>
            <div class="panel-page__banner">
                <LayoutBanner/>
            </div>
            <div class="panel-page__columns">
                <NodesPanel/>
                <RoutesPanel/>
            </div>
            <div class="panel-page__activity">
                <ActivityLog/>
            </div>
        </div>
    }
}
