//! JSON file format describing a wizard.
//!
//! ```json
//! {
//!   "steps": [
//!     { "title": "Account", "symbol": "1", "completed": true },
//!     { "title": "Profile", "selected": true },
//!     { "title": "Newsletter", "optional": true }
//!   ],
//!   "disable_navigation_bar": false
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{StepRecord, WizardModel};

/// Error surfaced when a wizard definition cannot be loaded.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("failed to read wizard definition {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid wizard definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("wizard definition has no steps")]
    Empty,
    #[error("wizard definition selects {0} steps; at most one may be selected")]
    MultipleSelected(usize),
}

/// Serialized form of a wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardDefinition {
    pub steps: Vec<StepRecord>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub disable_navigation_bar: bool,
}

impl WizardDefinition {
    /// Reads and validates a definition from `path`.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Parses and validates a definition from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self, DefinitionError> {
        let definition: Self = serde_json::from_str(data)?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.steps.is_empty() {
            return Err(DefinitionError::Empty);
        }
        let selected = self.steps.iter().filter(|step| step.selected).count();
        if selected > 1 {
            return Err(DefinitionError::MultipleSelected(selected));
        }
        Ok(())
    }

    /// Builds a model from the definition. When no step is selected the first
    /// one becomes the current step.
    pub fn into_model(self) -> WizardModel {
        let needs_selection = !self.steps.iter().any(|step| step.selected);
        let mut model = WizardModel::new(self.steps)
            .with_completed(self.completed)
            .with_navigation_bar_disabled(self.disable_navigation_bar);
        if needs_selection {
            model.select(0);
        }
        model
    }
}
