//! # signalbox-web
//!
//! Leptos + WASM control panel for a distributed railway interlocking
//! layout: pick a layout, inspect its nodes and routes, issue node commands,
//! and lock the panel against accidental changes.
//!
//! This crate contains pages, components, and application state. State
//! structs are plain types provided to components as `RwSignal` contexts
//! from the root [`app::App`] component.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
