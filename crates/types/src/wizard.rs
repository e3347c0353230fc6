//! Collaborator traits consumed by the navigation bar.
//!
//! A wizard container owns its steps and is the only party allowed to change
//! them. Views such as the navigation bar observe that state through these
//! traits and re-read it on every query.

/// Policy deciding whether the step at a wizard index can be reached.
pub trait NavigationMode {
    fn is_navigable(&self, index: usize) -> bool;
}

impl<F> NavigationMode for F
where
    F: Fn(usize) -> bool,
{
    fn is_navigable(&self, index: usize) -> bool {
        self(index)
    }
}

/// A single step (page) of a wizard.
pub trait WizardStep {
    /// Whether the wizard currently shows this step.
    fn selected(&self) -> bool;
    /// Whether the step has been completed at least once.
    fn completed(&self) -> bool;
    /// Whether the step may be skipped.
    fn optional(&self) -> bool;
    /// Title rendered as the indicator label.
    fn title(&self) -> &str;
    /// Symbol drawn inside the indicator by the `*-symbols` styles.
    fn navigation_symbol(&self) -> Option<&str> {
        None
    }
}

/// Read-only access to the state of a wizard.
pub trait WizardState {
    type Step: WizardStep;

    /// Steps in wizard order.
    fn wizard_steps(&self) -> &[Self::Step];

    fn navigation_mode(&self) -> &dyn NavigationMode;

    /// Whether the whole wizard has been finished.
    fn completed(&self) -> bool;

    fn disable_navigation_bar(&self) -> bool;

    /// Position of `step` inside [`WizardState::wizard_steps`].
    ///
    /// Steps are compared by identity, not by value, so two steps with equal
    /// fields still resolve to their own index. Returns `None` for a step that
    /// does not belong to this wizard.
    fn index_of_step(&self, step: &Self::Step) -> Option<usize> {
        self.wizard_steps().iter().position(|candidate| std::ptr::eq(candidate, step))
    }
}
