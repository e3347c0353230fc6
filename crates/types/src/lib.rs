//! Shared types for the Stepwise wizard navigation bar.
//!
//! The navigation bar reads a wizard exclusively through the traits in
//! [`wizard`]. The plain data implementations in [`model`] and the file format
//! in [`definition`] back the demo host and the test suites.

pub mod definition;
pub mod model;
pub mod wizard;

pub use definition::{DefinitionError, WizardDefinition};
pub use model::{StepRecord, WizardModel};
pub use wizard::{NavigationMode, WizardState, WizardStep};

/// Side effects requested by UI components.
///
/// Components never mutate the wizard directly; they report what should
/// happen and the host decides how to apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Navigate the wizard to the step at the given wizard index.
    GoToStep(usize),
}
