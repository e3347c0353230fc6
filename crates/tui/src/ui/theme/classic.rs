//! The classic palette: the stock wizard stylesheet colors.
//!
//! Backgrounds are left to the terminal so the bar blends into whatever
//! surface hosts it.

use std::borrow::Cow;

use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    variant::{IndicatorStyle, Orientation, StylesheetVariant},
};

pub const GREY_LIGHT: Color = Color::Rgb(0xE6, 0xE6, 0xE6); // #E6E6E6 markers and connectors
pub const GREY: Color = Color::Rgb(0x80, 0x80, 0x80); // #808080 current marker, labels
pub const GREY_DARK: Color = Color::Rgb(0x4D, 0x4D, 0x4D); // #4D4D4D label hover
pub const GREEN_DARK: Color = Color::Rgb(0x33, 0x99, 0x33); // #339933 done
pub const GREEN_BRIGHT: Color = Color::Rgb(0x38, 0xEF, 0x38); // #38EF38 optional
pub const GREEN_PALE: Color = Color::Rgb(0x8B, 0xEA, 0x8B); // #8BEA8B small horizontal current
pub const RED: Color = Color::Rgb(0xFF, 0x00, 0x00); // #FF0000 editing

fn build_classic_roles() -> ThemeRoles {
    ThemeRoles {
        background: Color::Reset,
        surface: Color::Reset,
        border: GREY,

        text: Color::Reset,
        text_muted: GREY,
        focus: GREEN_DARK,

        step_pending: GREY_LIGHT,
        step_current: GREY,
        step_done: GREEN_DARK,
        step_optional: GREEN_BRIGHT,
        step_editing: RED,
        step_symbol: Color::Black,
        connector: GREY_LIGHT,

        label: GREY,
        label_hover: GREY_DARK,
        default_label_hover: GREY,
    }
}

/// Stock stylesheet colors.
#[derive(Debug, Clone)]
pub struct ClassicTheme {
    roles: ThemeRoles,
}

impl ClassicTheme {
    pub fn new() -> Self {
        Self {
            roles: build_classic_roles(),
        }
    }
}

impl Default for ClassicTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for ClassicTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }

    /// The small horizontal bar uses a pale green current marker, leaves
    /// optional markers grey, and hovers default labels in the same green.
    fn variant_roles(&self, variant: StylesheetVariant) -> Cow<'_, ThemeRoles> {
        if variant == StylesheetVariant::new(IndicatorStyle::Small, Orientation::Horizontal) {
            let mut roles = self.roles.clone();
            roles.step_current = GREEN_PALE;
            roles.step_optional = GREY_LIGHT;
            roles.default_label_hover = GREEN_PALE;
            return Cow::Owned(roles);
        }
        Cow::Borrowed(&self.roles)
    }
}
