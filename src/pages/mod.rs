//! Page modules wired into the router.

pub mod panel;
