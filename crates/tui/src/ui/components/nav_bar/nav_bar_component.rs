use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use stepwise_types::{Effect, WizardState, WizardStep};
use tracing::debug;

use super::{
    IndicatorState, NavigationBarState, StepClasses,
    geometry::{self, StepSlot},
};
use crate::{
    app::App,
    ui::{
        components::Component,
        theme::{
            IndicatorStyle, Orientation, Theme, ThemeRoles,
            theme_helpers::{self as th, truncate_to_width},
        },
    },
};

/// Draws the wizard navigation bar and routes pointer and keyboard input on
/// it into [`Effect::GoToStep`].
#[derive(Debug)]
pub struct NavigationBarComponent {
    /// Title prefix of the surrounding block.
    pub title: String,
}

impl Default for NavigationBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationBarComponent {
    pub fn new() -> Self {
        Self {
            title: "Wizard".to_string(),
        }
    }
}

impl Component for NavigationBarComponent {
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        let orientation = app.nav_bar.variant.orientation;
        let target = match (key.code, orientation) {
            (KeyCode::Right, Orientation::Horizontal) | (KeyCode::Down, Orientation::Vertical) => app.nav_bar.cycle_focus(true),
            (KeyCode::Left, Orientation::Horizontal) | (KeyCode::Up, Orientation::Vertical) => app.nav_bar.cycle_focus(false),
            (KeyCode::Home, _) => app.nav_bar.first_flag(),
            (KeyCode::End, _) => app.nav_bar.last_flag(),
            (KeyCode::Tab, _) => {
                app.focus.next();
                None
            }
            (KeyCode::BackTab, _) => {
                app.focus.prev();
                None
            }
            (KeyCode::Enter, _) => return activate_focused(&app.wizard, &app.nav_bar),
            _ => None,
        };
        if let Some(flag) = target {
            app.focus.focus(&flag);
        }
        Vec::new()
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let effects = pointer_effects(&app.wizard, &mut app.nav_bar, mouse);
        if let Some(Effect::GoToStep(index)) = effects.first()
            && let Some(flag) = app.nav_bar.step_flag(*index)
        {
            app.focus.focus(&flag);
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        render_bar(frame, rect, &app.wizard, &mut app.nav_bar, &*app.theme.theme, &self.title);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let arrows = match app.nav_bar.variant.orientation {
            Orientation::Horizontal => " ←/→",
            Orientation::Vertical => " ↑/↓",
        };
        th::build_hint_spans(&*app.theme.theme, &[(arrows, " Focus"), (" Enter", " Go to step")])
    }
}

/// Emits [`Effect::GoToStep`] for the focused step when it is navigable.
pub fn activate_focused<W: WizardState + ?Sized>(wizard: &W, state: &NavigationBarState) -> Vec<Effect> {
    let Some(index) = state.focused_step() else {
        return Vec::new();
    };
    let view = state.view(wizard);
    match wizard.wizard_steps().get(index) {
        Some(step) if view.is_navigable(step) => {
            debug!(step = index, "navigation bar activated step");
            vec![Effect::GoToStep(index)]
        }
        _ => Vec::new(),
    }
}

/// Tracks hover and turns left clicks on navigable steps into effects.
/// Steps that are not navigable ignore the pointer entirely.
pub fn pointer_effects<W: WizardState + ?Sized>(wizard: &W, state: &mut NavigationBarState, mouse: MouseEvent) -> Vec<Effect> {
    let view = state.view(wizard);
    let target = state
        .step_at(Position::new(mouse.column, mouse.row))
        .filter(|index| wizard.wizard_steps().get(*index).is_some_and(|step| view.is_navigable(step)));

    match mouse.kind {
        MouseEventKind::Moved => {
            state.hovered = target;
            Vec::new()
        }
        MouseEventKind::Down(MouseButton::Left) => match target {
            Some(index) => {
                debug!(step = index, "navigation bar clicked step");
                vec![Effect::GoToStep(index)]
            }
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Renders the bar for `wizard` into `area` and records the layout in `state`
/// for hit testing.
pub fn render_bar<W: WizardState + ?Sized>(
    frame: &mut Frame,
    area: Rect,
    wizard: &W,
    state: &mut NavigationBarState,
    theme: &dyn Theme,
    title: &str,
) {
    let view = state.view(wizard);
    let count = view.number_of_wizard_steps();
    state.sync_step_count(count);

    let bar_title = format!("{title} · {} steps-{count}", state.variant.host_classes());
    let block = th::block(theme, Some(&bar_title), state.container_focus.get());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let roles = theme.variant_roles(state.variant);
    let geometry = geometry::compute(inner, count, state.variant);

    for connector in &geometry.connectors {
        render_connector(frame, *connector, &roles);
    }

    let steps = view.wizard_steps();
    let indices = view.display_indices();
    for ((slot, step), index) in geometry.slots.iter().zip(&steps).zip(&indices) {
        let classes = view.classes(step);
        let focused = state.step_focus_flags.get(*index).is_some_and(|flag| flag.get());
        render_indicator(
            frame,
            slot.indicator,
            step.navigation_symbol(),
            classes.indicator_state(),
            state.variant.style,
            &roles,
            focused,
        );
        let hovered = state.hovered == Some(*index);
        render_label(frame, slot, step.title(), classes, &roles, state.variant.orientation, hovered, focused);
    }

    state.last_area = area;
    state.per_step_areas = geometry.slots.iter().map(StepSlot::hit_area).collect();
    state.display_indices = indices;
}

fn render_connector(frame: &mut Frame, area: Rect, roles: &ThemeRoles) {
    let style = Style::default().fg(roles.connector);
    let paragraph = if area.height == 1 {
        Paragraph::new("─".repeat(usize::from(area.width)))
    } else {
        Paragraph::new(vec![Line::from("│"); usize::from(area.height)])
    };
    frame.render_widget(paragraph.style(style), area);
}

fn render_indicator(
    frame: &mut Frame,
    area: Rect,
    symbol: Option<&str>,
    state: IndicatorState,
    style: IndicatorStyle,
    roles: &ThemeRoles,
    focused: bool,
) {
    let color = roles.indicator_color(state);
    if !style.is_large() {
        let mut dot = Style::default().fg(color);
        if focused {
            dot = dot.add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(Paragraph::new("●").style(dot), area);
        return;
    }

    let border_type = if focused { BorderType::Double } else { BorderType::Rounded };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(color));
    let text_style = if style.is_filled() {
        block = block.style(Style::default().bg(color));
        Style::default().fg(roles.step_symbol).bg(color)
    } else {
        Style::default().fg(color)
    };
    let text = match (style.shows_symbols(), symbol) {
        (true, Some(symbol)) => truncate_to_width(symbol, 3),
        _ => String::new(),
    };
    let paragraph = Paragraph::new(text)
        .style(text_style.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

#[allow(clippy::too_many_arguments)]
fn render_label(
    frame: &mut Frame,
    slot: &StepSlot,
    title: &str,
    classes: StepClasses,
    roles: &ThemeRoles,
    orientation: Orientation,
    hovered: bool,
    focused: bool,
) {
    let hovered = hovered && classes.navigable;
    let color = match (hovered, classes.default) {
        (true, true) => roles.default_label_hover,
        (true, false) => roles.label_hover,
        (false, _) => roles.label,
    };
    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if hovered || (focused && classes.navigable) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    let alignment = match orientation {
        Orientation::Horizontal => Alignment::Center,
        Orientation::Vertical => Alignment::Left,
    };
    let text = truncate_to_width(&title.to_uppercase(), usize::from(slot.label.width));
    frame.render_widget(Paragraph::new(text).style(style).alignment(alignment), slot.label);
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
    use stepwise_types::{StepRecord, WizardModel};

    use super::*;
    use crate::ui::components::nav_bar::Direction;
    use crate::ui::theme::{ClassicTheme, StylesheetVariant, classic};

    fn wizard() -> WizardModel {
        WizardModel::new(vec![
            StepRecord::new("Account").as_completed(),
            StepRecord::new("Profile").as_selected(),
            StepRecord::new("Billing").as_optional(),
        ])
    }

    fn draw(wizard: &WizardModel, state: &mut NavigationBarState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
        let theme = ClassicTheme::new();
        terminal
            .draw(|frame| render_bar(frame, frame.area(), wizard, state, &theme, "Wizard"))
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    fn column_of(buffer: &Buffer, y: u16, needle: &str) -> u16 {
        let line = row(buffer, y);
        let byte = line.find(needle).expect("label present");
        u16::try_from(line[..byte].chars().count()).expect("fits")
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn renders_uppercase_labels_in_display_order() {
        let wizard = wizard();
        let mut state = NavigationBarState::default();
        let buffer = draw(&wizard, &mut state, 36, 4);
        let labels = row(&buffer, 2);
        let account = labels.find("ACCOUNT").expect("account");
        let profile = labels.find("PROFILE").expect("profile");
        let billing = labels.find("BILLING").expect("billing");
        assert!(account < profile && profile < billing);
        assert!(row(&buffer, 0).contains("steps-3"));
        assert!(row(&buffer, 1).contains('─'));

        state.set_direction(Direction::RightToLeft);
        let buffer = draw(&wizard, &mut state, 36, 4);
        let labels = row(&buffer, 2);
        assert!(labels.find("BILLING") < labels.find("ACCOUNT"));
        assert_eq!(state.display_indices, vec![2, 1, 0]);
    }

    #[test]
    fn small_horizontal_uses_the_classic_overrides() {
        let wizard = wizard();
        let mut state = NavigationBarState::default();
        let buffer = draw(&wizard, &mut state, 36, 4);
        let dots: Vec<_> = (0..36u16).filter(|x| buffer[(*x, 1)].symbol() == "●").map(|x| buffer[(x, 1)].fg).collect();
        assert_eq!(dots, vec![classic::GREEN_DARK, classic::GREEN_PALE, classic::GREY_LIGHT]);
    }

    #[test]
    fn large_symbols_draw_the_navigation_symbol() {
        let wizard = WizardModel::new(vec![
            StepRecord::new("One").with_symbol("1").as_selected(),
            StepRecord::new("Two").with_symbol("2"),
        ]);
        let mut state = NavigationBarState::new(
            Direction::LeftToRight,
            StylesheetVariant::new(IndicatorStyle::LargeEmptySymbols, Orientation::Horizontal),
        );
        let buffer = draw(&wizard, &mut state, 30, 6);
        let middle = row(&buffer, 2);
        assert!(middle.contains('1') && middle.contains('2'));
        assert!(row(&buffer, 4).contains("TWO"));
    }

    #[test]
    fn clicks_only_reach_navigable_steps() {
        let wizard = wizard();
        let mut state = NavigationBarState::new(Direction::RightToLeft, StylesheetVariant::default());
        let buffer = draw(&wizard, &mut state, 36, 4);

        let billing = column_of(&buffer, 2, "BILLING");
        let profile = column_of(&buffer, 2, "PROFILE");
        let click = MouseEventKind::Down(MouseButton::Left);
        assert_eq!(pointer_effects(&wizard, &mut state, mouse(click, billing, 2)), vec![Effect::GoToStep(2)]);
        assert!(pointer_effects(&wizard, &mut state, mouse(click, profile, 2)).is_empty());
        assert!(pointer_effects(&wizard, &mut state, mouse(click, 0, 0)).is_empty());

        let disabled = wizard.with_navigation_bar_disabled(true);
        assert!(pointer_effects(&disabled, &mut state, mouse(click, billing, 2)).is_empty());
    }

    #[test]
    fn hover_recolors_navigable_labels() {
        let wizard = wizard();
        let mut state = NavigationBarState::default();
        let buffer = draw(&wizard, &mut state, 36, 4);
        let account = column_of(&buffer, 2, "ACCOUNT");
        let profile = column_of(&buffer, 2, "PROFILE");

        pointer_effects(&wizard, &mut state, mouse(MouseEventKind::Moved, profile, 2));
        assert_eq!(state.hovered, None);

        pointer_effects(&wizard, &mut state, mouse(MouseEventKind::Moved, account, 2));
        assert_eq!(state.hovered, Some(0));
        let buffer = draw(&wizard, &mut state, 36, 4);
        assert_eq!(buffer[(account, 2)].fg, classic::GREY_DARK);
        assert_eq!(buffer[(profile, 2)].fg, classic::GREY);
    }

    #[test]
    fn enter_activates_only_navigable_focus() {
        let wizard = wizard();
        let mut state = NavigationBarState::default();
        state.sync_step_count(3);
        assert!(activate_focused(&wizard, &state).is_empty());

        state.step_focus_flags[1].set(true);
        assert!(activate_focused(&wizard, &state).is_empty());

        state.step_focus_flags[1].set(false);
        state.step_focus_flags[2].set(true);
        assert_eq!(activate_focused(&wizard, &state), vec![Effect::GoToStep(2)]);
    }
}
