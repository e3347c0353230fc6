//! Stylesheet variants for the navigation bar.
//!
//! A variant pairs an [`IndicatorStyle`] (how each step marker is drawn) with
//! an [`Orientation`] (how the markers are laid out). Themes may tweak their
//! colors per variant; see [`super::Theme::variant_roles`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a variant name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    #[error("unknown indicator style '{0}' (expected one of: small, large-filled, large-empty, large-filled-symbols, large-empty-symbols)")]
    UnknownIndicatorStyle(String),
    #[error("unknown orientation '{0}' (expected horizontal or vertical)")]
    UnknownOrientation(String),
}

/// How a single step indicator is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IndicatorStyle {
    /// One-cell dot.
    #[default]
    Small,
    /// Large marker painted with the state color.
    LargeFilled,
    /// Large marker outlined with the state color.
    LargeEmpty,
    /// Filled marker showing the step symbol.
    LargeFilledSymbols,
    /// Outlined marker showing the step symbol.
    LargeEmptySymbols,
}

impl IndicatorStyle {
    pub const ALL: [IndicatorStyle; 5] = [
        IndicatorStyle::Small,
        IndicatorStyle::LargeFilled,
        IndicatorStyle::LargeEmpty,
        IndicatorStyle::LargeFilledSymbols,
        IndicatorStyle::LargeEmptySymbols,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            IndicatorStyle::Small => "small",
            IndicatorStyle::LargeFilled => "large-filled",
            IndicatorStyle::LargeEmpty => "large-empty",
            IndicatorStyle::LargeFilledSymbols => "large-filled-symbols",
            IndicatorStyle::LargeEmptySymbols => "large-empty-symbols",
        }
    }

    pub const fn is_large(self) -> bool {
        !matches!(self, IndicatorStyle::Small)
    }

    /// Whether the marker body is painted rather than only outlined.
    pub const fn is_filled(self) -> bool {
        matches!(
            self,
            IndicatorStyle::Small | IndicatorStyle::LargeFilled | IndicatorStyle::LargeFilledSymbols
        )
    }

    pub const fn shows_symbols(self) -> bool {
        matches!(self, IndicatorStyle::LargeFilledSymbols | IndicatorStyle::LargeEmptySymbols)
    }

    /// The next style in [`IndicatorStyle::ALL`], wrapping around.
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|style| *style == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for IndicatorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorStyle {
    type Err = VariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == normalized)
            .ok_or_else(|| VariantError::UnknownIndicatorStyle(value.to_string()))
    }
}

/// Layout axis of the bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = VariantError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(VariantError::UnknownOrientation(value.to_string())),
        }
    }
}

/// Indicator style and orientation applied together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StylesheetVariant {
    pub style: IndicatorStyle,
    pub orientation: Orientation,
}

impl StylesheetVariant {
    pub const fn new(style: IndicatorStyle, orientation: Orientation) -> Self {
        Self { style, orientation }
    }

    /// Host class list, e.g. `horizontal large-filled`.
    pub fn host_classes(&self) -> String {
        format!("{} {}", self.orientation, self.style)
    }
}
