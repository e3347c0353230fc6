//! UI rendering: layout, components, themes, and the terminal runtime.

pub mod components;
pub mod main_view;
pub mod runtime;
pub mod snapshot;
pub mod theme;
