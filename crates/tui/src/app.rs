//! Application state for the Stepwise demo host.
//!
//! `App` owns the wizard and is the only place that mutates it. Components
//! report [`Effect`]s and the host keys below drive the wizard directly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rat_focus::{Focus, FocusBuilder};
use stepwise_types::{Effect, WizardModel, WizardState};
use stepwise_util::PreferencesPayload;
use tracing::{debug, warn};

use crate::ui::components::nav_bar::NavigationBarState;
use crate::ui::theme::{LoadedTheme, catalog, supports_theme_cycling};

/// Key hints for the host-level shortcuts.
pub const HOST_HINTS: &[(&str, &str)] = &[
    (" n", " Next"),
    (" f", " Finish"),
    (" r", " Reset"),
    (" d", " Lock bar"),
    (" x", " Flip"),
    (" s", " Style"),
    (" o", " Orientation"),
    (" t", " Theme"),
    (" q", " Quit"),
];

pub struct App {
    pub wizard: WizardModel,
    pub nav_bar: NavigationBarState,
    pub theme: LoadedTheme,
    pub focus: Focus,
    /// Message shown in the details pane after the last action.
    pub status: Option<String>,
    pub should_quit: bool,
    theme_cycling: bool,
}

impl App {
    pub fn new(wizard: WizardModel, nav_bar: NavigationBarState, theme: LoadedTheme) -> Self {
        let mut nav_bar = nav_bar;
        nav_bar.sync_step_count(wizard.steps().len());
        let focus = FocusBuilder::build_for(&nav_bar);
        let mut app = Self {
            wizard,
            nav_bar,
            theme,
            focus,
            status: None,
            should_quit: false,
            theme_cycling: supports_theme_cycling(),
        };
        app.focus_selected_step();
        app
    }

    /// Moves keyboard focus onto the wizard's selected step.
    pub fn focus_selected_step(&mut self) {
        if let Some(flag) = self.wizard.selected_index().and_then(|index| self.nav_bar.step_flag(index)) {
            self.focus.focus(&flag);
        }
    }

    /// Executes effects reported by components.
    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::GoToStep(index) => {
                    if self.wizard.select(index) {
                        let title = self.wizard.steps()[index].title.clone();
                        debug!(step = index, title = %title, "navigated to step");
                        self.status = Some(format!("Moved to {title}"));
                    } else {
                        warn!(step = index, "ignored navigation to a step outside the wizard");
                    }
                }
            }
        }
    }

    /// Handles the host shortcuts. Returns `false` when the key is not one of
    /// them so it can be routed to the navigation bar.
    pub fn handle_host_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }
        if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => {
                let status = match self.wizard.complete_selected() {
                    Some(index) => format!("Completed step, now on {}", self.wizard.steps()[index].title),
                    None => "Last step completed; press f to finish".to_string(),
                };
                self.status = Some(status);
                self.focus_selected_step();
            }
            KeyCode::Char('f') => {
                self.wizard.set_completed(true);
                self.status = Some("Wizard finished".to_string());
            }
            KeyCode::Char('r') => {
                self.wizard.reset();
                self.status = Some("Wizard reset".to_string());
                self.focus_selected_step();
            }
            KeyCode::Char('d') => {
                let disabled = !self.wizard.disable_navigation_bar();
                self.wizard.set_disable_navigation_bar(disabled);
                self.status = Some(if disabled { "Navigation bar locked" } else { "Navigation bar unlocked" }.to_string());
            }
            KeyCode::Char('x') => {
                self.nav_bar.set_direction(self.nav_bar.direction.flipped());
                self.status = Some(format!("Direction {}", self.nav_bar.direction));
            }
            KeyCode::Char('s') => {
                self.nav_bar.variant.style = self.nav_bar.variant.style.next();
                self.status = Some(format!("Indicator style {}", self.nav_bar.variant.style));
            }
            KeyCode::Char('o') => {
                self.nav_bar.variant.orientation = self.nav_bar.variant.orientation.toggled();
                self.status = Some(format!("Orientation {}", self.nav_bar.variant.orientation));
            }
            KeyCode::Char('t') => self.cycle_theme(),
            _ => return false,
        }
        debug!(key = ?key.code, "handled host key");
        true
    }

    fn cycle_theme(&mut self) {
        if !self.theme_cycling {
            self.status = Some("Theme cycling needs a truecolor terminal".to_string());
            return;
        }
        let next = catalog::next_truecolor(self.theme.definition);
        self.theme = LoadedTheme::from_definition(next);
        self.status = Some(format!("Theme {}", next.label));
    }

    /// Current presentation settings in the form the preferences store keeps.
    pub fn preferences_payload(&self) -> PreferencesPayload {
        PreferencesPayload {
            theme: Some(self.theme.definition.id.to_string()),
            indicator_style: Some(self.nav_bar.variant.style.to_string()),
            orientation: Some(self.nav_bar.variant.orientation.to_string()),
            direction: Some(self.nav_bar.direction.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use stepwise_types::StepRecord;

    use super::*;
    use crate::ui::components::nav_bar::Direction;
    use crate::ui::theme::{IndicatorStyle, Orientation, StylesheetVariant};

    fn app() -> App {
        let wizard = WizardModel::new(vec![
            StepRecord::new("Account").as_selected(),
            StepRecord::new("Profile"),
            StepRecord::new("Confirm"),
        ]);
        let theme = LoadedTheme::from_definition(catalog::default_truecolor());
        App::new(wizard, NavigationBarState::default(), theme)
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_host_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn starts_focused_on_the_selected_step() {
        let app = app();
        assert_eq!(app.nav_bar.focused_step(), Some(0));
        assert_eq!(app.nav_bar.step_focus_flags.len(), 3);
    }

    #[test]
    fn go_to_step_selects_in_range_only() {
        let mut app = app();
        app.apply_effects(vec![Effect::GoToStep(2)]);
        assert_eq!(app.wizard.selected_index(), Some(2));
        app.apply_effects(vec![Effect::GoToStep(9)]);
        assert_eq!(app.wizard.selected_index(), Some(2));
    }

    #[test]
    fn host_keys_drive_the_wizard() {
        let mut app = app();
        assert!(press(&mut app, KeyCode::Char('n')));
        assert_eq!(app.wizard.selected_index(), Some(1));
        assert!(app.wizard.steps()[0].completed);

        assert!(press(&mut app, KeyCode::Char('f')));
        assert!(WizardState::completed(&app.wizard));

        assert!(press(&mut app, KeyCode::Char('d')));
        assert!(app.wizard.disable_navigation_bar());

        assert!(press(&mut app, KeyCode::Char('r')));
        assert!(!WizardState::completed(&app.wizard));
        assert_eq!(app.wizard.selected_index(), Some(0));

        assert!(!press(&mut app, KeyCode::Enter));
        assert!(!app.should_quit);
        assert!(press(&mut app, KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn presentation_keys_update_the_bar() {
        let mut app = app();
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(app.nav_bar.direction, Direction::RightToLeft);
        assert_eq!(
            app.nav_bar.variant,
            StylesheetVariant::new(IndicatorStyle::LargeFilled, Orientation::Vertical)
        );

        let payload = app.preferences_payload();
        assert_eq!(payload.direction.as_deref(), Some("right-to-left"));
        assert_eq!(payload.indicator_style.as_deref(), Some("large-filled"));
        assert_eq!(payload.orientation.as_deref(), Some("vertical"));
        assert_eq!(payload.theme.as_deref(), Some("classic"));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        assert!(app.handle_host_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.should_quit);
    }
}
