//! ANSI 256-color fallback theme for terminals without truecolor support.
//!
//! Approximates the classic stylesheet with indexed colors so the markers stay
//! distinguishable in 8-bit terminals.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

#[derive(Debug, Clone)]
pub struct Ansi256Theme {
    roles: ThemeRoles,
}

impl Ansi256Theme {
    pub fn new() -> Self {
        Self {
            roles: ThemeRoles {
                background: Color::Reset,
                surface: Color::Reset,
                border: Color::Indexed(244),

                text: Color::Reset,
                text_muted: Color::Indexed(244),
                focus: Color::Indexed(28),

                step_pending: Color::Indexed(254),
                step_current: Color::Indexed(244),
                step_done: Color::Indexed(28),
                step_optional: Color::Indexed(83),
                step_editing: Color::Indexed(196),
                step_symbol: Color::Indexed(16),
                connector: Color::Indexed(254),

                label: Color::Indexed(244),
                label_hover: Color::Indexed(239),
                default_label_hover: Color::Indexed(244),
            },
        }
    }
}

impl Default for Ansi256Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Ansi256Theme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
