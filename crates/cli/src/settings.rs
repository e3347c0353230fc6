//! Resolution of presentation settings from flags and saved preferences.

use anyhow::{Context, Result};
use stepwise_tui::{Direction, IndicatorStyle, Orientation, StylesheetVariant};
use stepwise_util::PreferencesPayload;
use tracing::warn;

/// Values given on the command line. `None` defers to the preferences file.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides<'a> {
    pub direction: Option<&'a str>,
    pub style: Option<&'a str>,
    pub orientation: Option<&'a str>,
    pub theme: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub direction: Direction,
    pub variant: StylesheetVariant,
    /// Preferred theme name; the loader may still override it.
    pub theme: Option<String>,
}

/// Flags beat saved preferences, which beat built-in defaults.
///
/// A bad flag is an error. A bad saved value is logged and ignored so that a
/// stale preferences file never blocks startup.
pub fn resolve(overrides: &Overrides<'_>, saved: &PreferencesPayload) -> Result<Settings> {
    let direction = overrides
        .direction
        .or(saved.direction.as_deref())
        .map(Direction::from_attribute)
        .unwrap_or_default();

    let style = match overrides.style {
        Some(name) => name.parse::<IndicatorStyle>().context("invalid --style")?,
        None => saved_or_default(saved.indicator_style.as_deref(), "indicator_style"),
    };
    let orientation = match overrides.orientation {
        Some(name) => name.parse::<Orientation>().context("invalid --orientation")?,
        None => saved_or_default(saved.orientation.as_deref(), "orientation"),
    };

    let theme = overrides.theme.map(str::to_string).or_else(|| saved.theme.clone());

    Ok(Settings {
        direction,
        variant: StylesheetVariant::new(style, orientation),
        theme,
    })
}

fn saved_or_default<T>(value: Option<&str>, field: &str) -> T
where
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    match value.map(str::parse::<T>) {
        Some(Ok(parsed)) => parsed,
        Some(Err(error)) => {
            warn!(field, error = %error, "ignoring saved preference");
            T::default()
        }
        None => T::default(),
    }
}
