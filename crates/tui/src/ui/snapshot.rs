//! Headless rendering for `--print` and `--json`.

use anyhow::Result;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use serde::Serialize;
use stepwise_types::{WizardState, WizardStep};

use crate::app::App;
use crate::ui::components::nav_bar::{IndicatorState, NavigationBarView, StepClasses};
use crate::ui::main_view::MainView;

/// Draws one frame of the full layout and returns its text, one string per
/// row with trailing blanks removed.
pub fn render_snapshot(app: &mut App, width: u16, height: u16) -> Result<Vec<String>> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    let mut main_view = MainView::new();
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(buffer_lines(terminal.backend().buffer()))
}

fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect();
            line.trim_end().to_string()
        })
        .collect()
}

/// One step as the bar presents it.
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    /// Position in display order.
    pub position: usize,
    /// Index in wizard order.
    pub index: usize,
    pub title: String,
    pub symbol: Option<String>,
    pub classes: StepClasses,
    pub class_names: Vec<&'static str>,
    pub indicator: IndicatorState,
}

/// Reports every step in display order.
pub fn step_report<W: WizardState + ?Sized>(view: &NavigationBarView<'_, W>) -> Vec<StepReport> {
    view.wizard_steps()
        .into_iter()
        .zip(view.display_indices())
        .enumerate()
        .map(|(position, (step, index))| {
            let classes = view.classes(step);
            StepReport {
                position,
                index,
                title: step.title().to_string(),
                symbol: step.navigation_symbol().map(str::to_string),
                classes,
                class_names: classes.class_names(),
                indicator: classes.indicator_state(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use stepwise_types::{StepRecord, WizardModel};

    use super::*;
    use crate::ui::components::nav_bar::{Direction, NavigationBarState};
    use crate::ui::theme::{LoadedTheme, catalog};

    fn app(direction: Direction) -> App {
        let wizard = WizardModel::new(vec![
            StepRecord::new("Account").as_completed(),
            StepRecord::new("Profile").as_selected(),
            StepRecord::new("Billing").as_optional(),
        ]);
        let mut state = NavigationBarState::default();
        state.set_direction(direction);
        App::new(wizard, state, LoadedTheme::from_definition(catalog::default_truecolor()))
    }

    #[test]
    fn snapshot_contains_the_bar_and_the_details() {
        let mut app = app(Direction::LeftToRight);
        let lines = render_snapshot(&mut app, 60, 14).expect("snapshot");
        assert_eq!(lines.len(), 14);
        let labels = &lines[2];
        assert!(labels.find("ACCOUNT") < labels.find("BILLING"));
        assert!(lines.iter().any(|line| line.contains("Profile  [current]")));
        assert!(lines[13].starts_with("Hints:"));
    }

    #[test]
    fn report_follows_display_order() {
        let app = app(Direction::RightToLeft);
        let report = step_report(&app.nav_bar.view(&app.wizard));
        let titles: Vec<_> = report.iter().map(|step| step.title.as_str()).collect();
        assert_eq!(titles, vec!["Billing", "Profile", "Account"]);
        assert_eq!(report[0].index, 2);
        assert_eq!(report[0].indicator, IndicatorState::Optional);
        assert_eq!(report[2].class_names, vec!["done", "navigable"]);

        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json[1]["classes"]["current"], true);
        assert_eq!(json[2]["indicator"], "done");
    }
}
