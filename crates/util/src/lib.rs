//! Utilities shared by the Stepwise binary and TUI.

pub mod path_processing;
pub mod preferences;

pub use path_processing::expand_tilde;
pub use preferences::{PREFERENCES_PATH_ENV, PreferencesError, PreferencesPayload, UserPreferences};
