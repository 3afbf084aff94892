//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::panel::PanelPage;
use crate::state::activity::ActivityState;
use crate::state::layouts::LayoutsState;
use crate::state::ui::UiState;

/// Layout catalog bundled with the panel. The host distributes layouts as
/// JSON documents of this same shape.
const BUNDLED_LAYOUTS: &str = include_str!("../assets/layouts.json");

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let ui = RwSignal::new(UiState::default());
    let layouts = RwSignal::new(LayoutsState::from_catalog(BUNDLED_LAYOUTS));
    let activity = RwSignal::new(ActivityState::default());

    provide_context(ui);
    provide_context(layouts);
    provide_context(activity);

    view! {
        <Stylesheet id="leptos" href="/style.css"/>
        <Title text="Signalbox"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PanelPage/>
            </Routes>
        </Router>
    }
}
