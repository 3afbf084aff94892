//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the panel chrome and display surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod activity_log;
pub mod layout_banner;
pub mod nav_bar;
pub mod nodes_panel;
pub mod routes_panel;
