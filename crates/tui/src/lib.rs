//! # Stepwise TUI
//!
//! Terminal rendering of a wizard navigation bar.
//!
//! The bar reads any [`stepwise_types::WizardState`] through
//! [`NavigationBarView`], which classifies each step (current, done, default,
//! editing, optional, navigable). [`NavigationBarComponent`] draws those
//! classes with ratatui using the active theme and stylesheet variant, and
//! reports clicks or Enter on navigable steps as
//! [`stepwise_types::Effect::GoToStep`] for the host to apply.
//!
//! The crate also ships the demo host used by the `stepwise` binary: [`App`],
//! the interactive [`run`] loop, and headless [`render_snapshot`].

mod app;
mod ui;

use anyhow::Result;

pub use app::{App, HOST_HINTS};
pub use ui::components::nav_bar::{
    Direction, IndicatorState, NavigationBarComponent, NavigationBarState, NavigationBarView, StepClasses, activate_focused,
    geometry, pointer_effects, render_bar,
};
pub use ui::snapshot::{StepReport, render_snapshot, step_report};
pub use ui::theme::{
    IndicatorStyle, LoadedTheme, Orientation, StylesheetVariant, Theme, ThemeDefinition, ThemeRoles, VariantError, catalog,
    load as load_theme,
};

/// Runs the interactive wizard until the user quits.
///
/// Sets up the terminal (raw mode, alternate screen, mouse capture), drives
/// the event loop, and restores the terminal before returning the final app
/// state.
///
/// # Errors
///
/// Terminal setup, drawing, or teardown failures.
pub async fn run(app: App) -> Result<App> {
    ui::runtime::run_app(app).await
}
