//! Wizard navigation bar.
//!
//! [`NavigationBarView`] projects a [`stepwise_types::WizardState`] onto the
//! per-step classification flags. [`NavigationBarState`] keeps what must
//! survive between frames (direction, stylesheet variant, focus, hit areas),
//! and [`NavigationBarComponent`] draws the bar with ratatui and turns pointer
//! and keyboard input into [`stepwise_types::Effect::GoToStep`].
//!
//! # Usage
//!
//! ```ignore
//! let wizard = WizardModel::new(vec![StepRecord::new("Account").as_selected()]);
//! let mut state = NavigationBarState::default();
//! terminal.draw(|frame| render_bar(frame, frame.area(), &wizard, &mut state, &theme, "Wizard"))?;
//! ```

mod classes;
mod direction;
pub mod geometry;
mod nav_bar_component;
mod state;
mod view;

pub use classes::{IndicatorState, StepClasses};
pub use direction::Direction;
pub use nav_bar_component::{NavigationBarComponent, activate_focused, pointer_effects, render_bar};
pub use state::NavigationBarState;
pub use view::NavigationBarView;
