use serde::Serialize;

/// Visual state of a step marker after applying stylesheet precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorState {
    Pending,
    Current,
    Done,
    Optional,
    Editing,
}

impl IndicatorState {
    pub const fn as_str(self) -> &'static str {
        match self {
            IndicatorState::Pending => "pending",
            IndicatorState::Current => "current",
            IndicatorState::Done => "done",
            IndicatorState::Optional => "optional",
            IndicatorState::Editing => "editing",
        }
    }
}

/// Classification flags for one step, as bound onto its indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StepClasses {
    pub default: bool,
    pub current: bool,
    pub done: bool,
    pub editing: bool,
    pub optional: bool,
    pub navigable: bool,
}

impl StepClasses {
    /// Names of the flags that are set, in stylesheet order.
    pub fn class_names(&self) -> Vec<&'static str> {
        [
            ("default", self.default),
            ("current", self.current),
            ("done", self.done),
            ("editing", self.editing),
            ("optional", self.optional),
            ("navigable", self.navigable),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect()
    }

    /// Space separated class list, e.g. `done navigable`.
    pub fn class_attribute(&self) -> String {
        self.class_names().join(" ")
    }

    /// Resolves the marker state. Later stylesheet rules win, so `editing`
    /// beats `optional`, which beats `done`, then `current`.
    pub fn indicator_state(&self) -> IndicatorState {
        if self.editing {
            IndicatorState::Editing
        } else if self.optional {
            IndicatorState::Optional
        } else if self.done {
            IndicatorState::Done
        } else if self.current {
            IndicatorState::Current
        } else {
            IndicatorState::Pending
        }
    }
}
