//! UI components.

pub mod component;
pub mod nav_bar;
pub mod step_details;

pub use component::*;
pub use nav_bar::NavigationBarComponent;
pub use step_details::StepDetailsComponent;
