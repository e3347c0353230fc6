use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use stepwise_types::WizardState;

use crate::{
    app::App,
    ui::{components::Component, theme::theme_helpers as th},
};

/// Body pane listing every step with the classes the bar derived for it.
#[derive(Debug, Default)]
pub struct StepDetailsComponent;

impl Component for StepDetailsComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.theme.theme;
        let block = th::block(theme, Some("Steps"), false);
        let view = app.nav_bar.view(&app.wizard);

        let mut lines = Vec::with_capacity(view.number_of_wizard_steps() + 3);
        for (index, step) in app.wizard.steps().iter().enumerate() {
            let classes = view.classes(step);
            let marker = if step.selected { "▸" } else { " " };
            lines.push(Line::from(vec![
                Span::styled(format!("{marker} {}. ", index + 1), theme.text_muted_style()),
                Span::styled(step.title.clone(), theme.text_primary_style().add_modifier(Modifier::BOLD)),
                Span::styled(format!("  [{}]", classes.class_attribute()), theme.text_muted_style()),
            ]));
        }

        lines.push(Line::default());
        let mut flags = Vec::new();
        if app.wizard.completed() {
            flags.push("completed");
        }
        if app.wizard.disable_navigation_bar() {
            flags.push("navigation locked");
        }
        if !flags.is_empty() {
            lines.push(Line::from(Span::styled(flags.join(", "), theme.accent_emphasis_style())));
        }
        if let Some(status) = app.status.as_deref() {
            lines.push(Line::from(Span::styled(status.to_string(), theme.text_primary_style())));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }).block(block), rect);
    }
}
