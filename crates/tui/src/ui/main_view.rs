//! Top-level layout: navigation bar, step details, and the hint footer.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, HOST_HINTS};
use crate::ui::components::{Component, NavigationBarComponent, StepDetailsComponent, nav_bar::geometry};
use crate::ui::theme::{Orientation, theme_helpers as th};

#[derive(Debug, Default)]
pub struct MainView {
    pub nav_bar_view: NavigationBarComponent,
    pub details_view: StepDetailsComponent,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host shortcuts win; everything else goes to the navigation bar, and
    /// its effects are applied right away.
    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) {
        if app.handle_host_key(key) {
            return;
        }
        let effects = self.nav_bar_view.handle_key_events(app, key);
        app.apply_effects(effects);
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) {
        let effects = self.nav_bar_view.handle_mouse_events(app, mouse);
        app.apply_effects(effects);
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let [content, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
        let count = app.wizard.steps().len();

        match app.nav_bar.variant.orientation {
            Orientation::Horizontal => {
                let bar_height = geometry::preferred_height(count, app.nav_bar.variant);
                let [bar, body] = Layout::vertical([Constraint::Length(bar_height), Constraint::Min(0)]).areas(content);
                self.nav_bar_view.render(frame, bar, app);
                self.details_view.render(frame, body, app);
            }
            Orientation::Vertical => {
                let bar_width = vertical_bar_width(app).min(content.width / 2);
                let [bar, body] = Layout::horizontal([Constraint::Length(bar_width), Constraint::Min(0)]).areas(content);
                self.nav_bar_view.render(frame, bar, app);
                self.details_view.render(frame, body, app);
            }
        }

        let theme = &*app.theme.theme;
        let mut spans: Vec<Span> = vec![Span::styled("Hints:", theme.text_muted_style())];
        spans.extend(self.nav_bar_view.get_hint_spans(app));
        spans.extend(th::build_hint_spans(theme, HOST_HINTS));
        frame.render_widget(Paragraph::new(Line::from(spans)).style(theme.text_muted_style()), hints);
    }
}

/// Widest label plus the indicator and borders.
fn vertical_bar_width(app: &App) -> u16 {
    let (indicator_width, _) = geometry::indicator_size(app.nav_bar.variant.style);
    let widest = app.wizard.steps().iter().map(|step| step.title.width()).max().unwrap_or(0);
    let widest = u16::try_from(widest).unwrap_or(u16::MAX);
    widest.saturating_add(indicator_width).saturating_add(3).max(24)
}
