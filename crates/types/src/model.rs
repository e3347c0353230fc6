//! Plain data implementations of the wizard traits.
//!
//! `WizardModel` stores step flags and lets a host flip them. Navigation
//! policy is supplied through [`NavigationMode`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wizard::{NavigationMode, WizardState, WizardStep};

/// A wizard step backed by plain fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Title rendered as the indicator label.
    pub title: String,
    /// Optional symbol rendered inside large symbol indicators.
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub selected: bool,
}

impl StepRecord {
    /// Creates a pending, required step.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn as_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn as_completed(mut self) -> Self {
        self.completed = true;
        self
    }

    pub fn as_selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

impl WizardStep for StepRecord {
    fn selected(&self) -> bool {
        self.selected
    }

    fn completed(&self) -> bool {
        self.completed
    }

    fn optional(&self) -> bool {
        self.optional
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn navigation_symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }
}

type BoxedNavigationMode = Box<dyn NavigationMode + Send + Sync>;

/// In-memory wizard state with host-side mutators.
pub struct WizardModel {
    steps: Vec<StepRecord>,
    navigation_mode: BoxedNavigationMode,
    completed: bool,
    disable_navigation_bar: bool,
}

impl WizardModel {
    /// Creates a wizard over `steps`. Every step is reachable until a
    /// different navigation mode is installed.
    pub fn new(steps: Vec<StepRecord>) -> Self {
        Self {
            steps,
            navigation_mode: Box::new(|_: usize| true),
            completed: false,
            disable_navigation_bar: false,
        }
    }

    pub fn with_navigation_mode<M>(mut self, navigation_mode: M) -> Self
    where
        M: NavigationMode + Send + Sync + 'static,
    {
        self.navigation_mode = Box::new(navigation_mode);
        self
    }

    pub fn with_navigation_bar_disabled(mut self, disabled: bool) -> Self {
        self.disable_navigation_bar = disabled;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    /// Index of the selected step, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.steps.iter().position(|step| step.selected)
    }

    /// Makes the step at `index` the only selected step.
    ///
    /// Returns `false` and leaves the model untouched when `index` is out of
    /// range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            return false;
        }
        for (position, step) in self.steps.iter_mut().enumerate() {
            step.selected = position == index;
        }
        true
    }

    /// Marks the selected step completed and moves the selection forward.
    ///
    /// Returns the newly selected index. On the last step the selection stays
    /// where it is and `None` is returned.
    pub fn complete_selected(&mut self) -> Option<usize> {
        let current = self.selected_index()?;
        self.steps[current].completed = true;
        let next = current + 1;
        if self.select(next) { Some(next) } else { None }
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn set_disable_navigation_bar(&mut self, disabled: bool) {
        self.disable_navigation_bar = disabled;
    }

    /// Clears all progress and selects the first step.
    pub fn reset(&mut self) {
        self.completed = false;
        for step in &mut self.steps {
            step.completed = false;
        }
        self.select(0);
    }
}

impl WizardState for WizardModel {
    type Step = StepRecord;

    fn wizard_steps(&self) -> &[StepRecord] {
        &self.steps
    }

    fn navigation_mode(&self) -> &dyn NavigationMode {
        &*self.navigation_mode
    }

    fn completed(&self) -> bool {
        self.completed
    }

    fn disable_navigation_bar(&self) -> bool {
        self.disable_navigation_bar
    }
}

impl fmt::Debug for WizardModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardModel")
            .field("steps", &self.steps)
            .field("completed", &self.completed)
            .field("disable_navigation_bar", &self.disable_navigation_bar)
            .finish_non_exhaustive()
    }
}
