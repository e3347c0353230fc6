//! Theme styling for the navigation bar.
//!
//! Palettes map onto semantic [`ThemeRoles`]; stylesheet variants
//! ([`StylesheetVariant`]) select how markers are drawn and may adjust those
//! roles. Prefer these helpers over hard-coded colors.

pub mod ansi256;
pub mod catalog;
pub mod classic;
pub mod dracula;
pub mod loader;
pub mod nord;
pub mod roles;
pub mod theme_helpers;
pub mod variant;

pub use ansi256::Ansi256Theme;
pub use catalog::ThemeDefinition;
pub use classic::ClassicTheme;
pub use dracula::{DraculaTheme, DraculaThemeHighContrast};
pub use loader::{LoadedTheme, load, supports_theme_cycling};
pub use nord::NordTheme;
pub use roles::{Theme, ThemeRoles};
pub use variant::{IndicatorStyle, Orientation, StylesheetVariant, VariantError};
