use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use stepwise_tui::{
    App, Direction, IndicatorStyle, LoadedTheme, NavigationBarState, Orientation, StylesheetVariant, catalog, pointer_effects,
    render_bar, render_snapshot, step_report,
};
use stepwise_types::{Effect, StepRecord, WizardDefinition, WizardModel};

fn sample_wizard() -> WizardModel {
    WizardDefinition::from_json_str(
        r#"{
            "steps": [
                { "title": "Account", "symbol": "1", "completed": true },
                { "title": "Profile", "symbol": "2", "selected": true },
                { "title": "Billing", "symbol": "3", "optional": true },
                { "title": "Confirm", "symbol": "4" }
            ]
        }"#,
    )
    .expect("valid wizard")
    .into_model()
}

fn draw(wizard: &WizardModel, state: &mut NavigationBarState, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    let loaded = LoadedTheme::from_definition(catalog::default_truecolor());
    terminal
        .draw(|frame| render_bar(frame, frame.area(), wizard, state, &*loaded.theme, "Wizard"))
        .expect("draw");
    terminal.backend().buffer().clone()
}

fn rows(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

/// Cell column where `needle` starts; rows mix multi-byte box drawing characters.
fn column_of(line: &str, needle: &str) -> u16 {
    let byte = line.find(needle).expect("label rendered");
    u16::try_from(line[..byte].chars().count()).expect("column")
}

fn label_order(line: &str, labels: &[&str]) -> Vec<u16> {
    labels.iter().map(|label| column_of(line, label)).collect()
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn every_variant_renders_all_labels() {
    let wizard = sample_wizard();
    for style in IndicatorStyle::ALL {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let mut state = NavigationBarState::new(Direction::LeftToRight, StylesheetVariant::new(style, orientation));
            let buffer = draw(&wizard, &mut state, 64, 20);
            let text = rows(&buffer).join("\n");
            for label in ["ACCOUNT", "PROFILE", "BILLING", "CONFIRM"] {
                assert!(text.contains(label), "{label} missing for {style} {orientation}");
            }
            assert_eq!(state.per_step_areas.len(), 4);
        }
    }
}

#[test]
fn right_to_left_mirrors_the_labels() {
    let wizard = sample_wizard();
    let labels = ["ACCOUNT", "PROFILE", "BILLING", "CONFIRM"];

    let mut state = NavigationBarState::default();
    let forward = rows(&draw(&wizard, &mut state, 64, 4));
    let positions = label_order(&forward[2], &labels);
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    let mut state = NavigationBarState::new(Direction::from_attribute("right-to-left"), StylesheetVariant::default());
    let reversed = rows(&draw(&wizard, &mut state, 64, 4));
    let positions = label_order(&reversed[2], &labels);
    assert!(positions.windows(2).all(|pair| pair[0] > pair[1]));
}

#[test]
fn vertical_symbols_sit_inside_their_boxes() {
    let wizard = sample_wizard();
    let variant = StylesheetVariant::new(IndicatorStyle::LargeFilledSymbols, Orientation::Vertical);
    let mut state = NavigationBarState::new(Direction::LeftToRight, variant);
    let lines = rows(&draw(&wizard, &mut state, 30, 17));

    // Each step takes three rows plus one connector row, starting inside the border.
    assert!(lines[2].contains('1') && lines[2].contains("ACCOUNT"));
    assert!(lines[6].contains('2') && lines[6].contains("PROFILE"));
    assert!(lines[4].contains('│'));
}

#[test]
fn clicking_a_reversed_bar_targets_wizard_indices() {
    let wizard = sample_wizard();
    let mut state = NavigationBarState::new(Direction::RightToLeft, StylesheetVariant::default());
    let lines = rows(&draw(&wizard, &mut state, 64, 4));

    let confirm = column_of(&lines[2], "CONFIRM");
    let account = column_of(&lines[2], "ACCOUNT");

    assert_eq!(pointer_effects(&wizard, &mut state, left_click(confirm, 2)), vec![Effect::GoToStep(3)]);
    assert_eq!(pointer_effects(&wizard, &mut state, left_click(account, 2)), vec![Effect::GoToStep(0)]);
}

#[test]
fn navigation_mode_limits_clickable_steps() {
    let wizard = sample_wizard().with_navigation_mode(|index: usize| index <= 1);
    let mut state = NavigationBarState::default();
    let lines = rows(&draw(&wizard, &mut state, 64, 4));
    let report = step_report(&state.view(&wizard));
    let navigable: Vec<bool> = report.iter().map(|step| step.classes.navigable).collect();
    assert_eq!(navigable, vec![true, false, false, false]);

    let billing = column_of(&lines[2], "BILLING");
    assert!(pointer_effects(&wizard, &mut state, left_click(billing, 2)).is_empty());
}

#[test]
fn app_applies_clicks_from_the_snapshot_layout() {
    let mut app = App::new(
        sample_wizard(),
        NavigationBarState::default(),
        LoadedTheme::from_definition(catalog::default_truecolor()),
    );
    let lines = render_snapshot(&mut app, 64, 16).expect("snapshot");
    let confirm = column_of(&lines[2], "CONFIRM");

    let effects = pointer_effects(&app.wizard, &mut app.nav_bar, left_click(confirm, 2));
    app.apply_effects(effects);
    assert_eq!(app.wizard.selected_index(), Some(3));

    let lines = render_snapshot(&mut app, 64, 16).expect("snapshot");
    assert!(lines.iter().any(|line| line.contains("Moved to Confirm")));
}
