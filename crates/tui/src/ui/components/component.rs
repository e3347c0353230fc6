//! Component system for the Stepwise TUI.
//!
//! Components are self-contained UI elements that handle their own events and
//! render themselves into a provided `Rect`. They never change the wizard
//! directly; instead they report [`Effect`]s that the host applies.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect, text::Span};
use stepwise_types::Effect;

use crate::app::App;

/// A UI component with localized behavior.
///
/// 1. Event handling: `handle_key_events` / `handle_mouse_events` return the
///    effects the application should execute.
/// 2. Rendering: `render` draws into the given area and may record layout
///    (hit areas, last area) in the state it owns on `App`.
pub(crate) trait Component {
    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the footer while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }
}

/// Index of the first rect in `rects` containing `(x, y)`, provided the point
/// also falls inside `container`.
pub fn find_target_index_by_mouse_position(container: &Rect, rects: &[Rect], x: u16, y: u16) -> Option<usize> {
    let position = ratatui::layout::Position { x, y };
    if !container.contains(position) {
        return None;
    }
    rects.iter().position(|rect| rect.contains(position))
}
