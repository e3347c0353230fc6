use std::borrow::Cow;
use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

use super::variant::StylesheetVariant;
use crate::ui::components::nav_bar::IndicatorState;

/// Semantic color roles used by the navigation bar and its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub border: Color,

    pub text: Color,
    pub text_muted: Color,
    pub focus: Color,

    /// Marker color of steps that are neither current, done, optional nor
    /// being edited. Also the base color before any state applies.
    pub step_pending: Color,
    pub step_current: Color,
    pub step_done: Color,
    pub step_optional: Color,
    pub step_editing: Color,
    /// Foreground of symbols drawn on top of a filled marker.
    pub step_symbol: Color,
    /// Line joining consecutive markers.
    pub connector: Color,

    pub label: Color,
    pub label_hover: Color,
    /// Hover color for labels of default (pending, required) steps.
    pub default_label_hover: Color,
}

impl ThemeRoles {
    /// Marker color for a resolved indicator state.
    pub fn indicator_color(&self, state: IndicatorState) -> Color {
        match state {
            IndicatorState::Pending => self.step_pending,
            IndicatorState::Current => self.step_current,
            IndicatorState::Done => self.step_done,
            IndicatorState::Optional => self.step_optional,
            IndicatorState::Editing => self.step_editing,
        }
    }
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    /// Roles adjusted for a stylesheet variant. Most palettes look the same
    /// in every variant.
    fn variant_roles(&self, _variant: StylesheetVariant) -> Cow<'_, ThemeRoles> {
        Cow::Borrowed(self.roles())
    }

    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }

    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    fn accent_emphasis_style(&self) -> Style {
        Style::default().fg(self.roles().focus).add_modifier(Modifier::BOLD)
    }
}
