use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::{Position, Rect};
use stepwise_types::WizardState;

use super::{Direction, NavigationBarView};
use crate::ui::components::find_target_index_by_mouse_position;
use crate::ui::theme::StylesheetVariant;

/// Host-owned state of the navigation bar that survives between frames.
///
/// Focus flags are kept per wizard index so that flipping the direction keeps
/// focus on the same step. Hit areas are stored in display order together with
/// the wizard index each position shows.
#[derive(Debug, Clone)]
pub struct NavigationBarState {
    pub direction: Direction,
    pub variant: StylesheetVariant,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// One flag per wizard step, indexed by wizard index.
    pub step_focus_flags: Vec<FocusFlag>,
    /// Last rendered area of the bar.
    pub last_area: Rect,
    /// Clickable label area per display position.
    pub per_step_areas: Vec<Rect>,
    /// Wizard index shown at each display position during the last render.
    pub display_indices: Vec<usize>,
    /// Wizard index of the navigable step under the pointer.
    pub hovered: Option<usize>,
}

impl Default for NavigationBarState {
    fn default() -> Self {
        Self::new(Direction::default(), StylesheetVariant::default())
    }
}

impl NavigationBarState {
    pub fn new(direction: Direction, variant: StylesheetVariant) -> Self {
        Self {
            direction,
            variant,
            container_focus: FocusFlag::new().with_name("wizard.navigation_bar"),
            step_focus_flags: Vec::new(),
            last_area: Rect::default(),
            per_step_areas: Vec::new(),
            display_indices: Vec::new(),
            hovered: None,
        }
    }

    /// A view over `wizard_state` using this bar's direction.
    pub fn view<'a, W: WizardState + ?Sized>(&self, wizard_state: &'a W) -> NavigationBarView<'a, W> {
        NavigationBarView::new(wizard_state).with_direction(self.direction)
    }

    /// Recreates the step focus flags when the wizard's step count changed.
    ///
    /// Returns `true` when the flags were rebuilt; the host must then rebuild
    /// its focus tree.
    pub fn sync_step_count(&mut self, count: usize) -> bool {
        if self.step_focus_flags.len() == count {
            return false;
        }
        let focused = self.focused_step().map(|index| index.min(count.saturating_sub(1)));
        self.step_focus_flags = (0..count)
            .map(|index| FocusFlag::new().with_name(&format!("wizard.navigation_bar.step.{index}")))
            .collect();
        if let Some(index) = focused
            && let Some(flag) = self.step_focus_flags.get(index)
        {
            flag.set(true);
        }
        self.per_step_areas.clear();
        self.display_indices.clear();
        self.hovered = None;
        true
    }

    /// Changes the direction and keeps the recorded display order in step
    /// until the next render replaces it.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.direction != direction {
            self.direction = direction;
            self.display_indices.reverse();
            self.hovered = None;
        }
    }

    /// Wizard index of the focused step.
    pub fn focused_step(&self) -> Option<usize> {
        self.step_focus_flags.iter().position(|flag| flag.get())
    }

    /// Display position of the focused step.
    pub fn focused_position(&self) -> Option<usize> {
        let focused = self.focused_step()?;
        self.display_order().iter().position(|index| *index == focused)
    }

    pub fn step_flag(&self, index: usize) -> Option<FocusFlag> {
        self.step_focus_flags.get(index).cloned()
    }

    /// Flag of the step `forward` (or backward) of the focused one in display
    /// order, wrapping at both ends. Starts at the first step when nothing is
    /// focused yet.
    pub fn cycle_focus(&self, forward: bool) -> Option<FocusFlag> {
        let order = self.display_order();
        let len = order.len();
        if len == 0 {
            return None;
        }
        let next = match self.focused_position() {
            Some(position) if forward => (position + 1) % len,
            Some(position) => (position + len - 1) % len,
            None => 0,
        };
        self.step_flag(order[next])
    }

    /// Flag of the first step in display order.
    pub fn first_flag(&self) -> Option<FocusFlag> {
        self.display_order().first().and_then(|index| self.step_flag(*index))
    }

    pub fn last_flag(&self) -> Option<FocusFlag> {
        self.display_order().last().and_then(|index| self.step_flag(*index))
    }

    /// Wizard index of the step whose label area contains `position`.
    pub fn step_at(&self, position: Position) -> Option<usize> {
        let display_position =
            find_target_index_by_mouse_position(&self.last_area, &self.per_step_areas, position.x, position.y)?;
        self.display_indices.get(display_position).copied()
    }

    /// Display order from the last render, or the direction applied to the
    /// flag count before anything was rendered.
    fn display_order(&self) -> Vec<usize> {
        if self.display_indices.len() == self.step_focus_flags.len() {
            return self.display_indices.clone();
        }
        let count = self.step_focus_flags.len();
        if self.direction.is_reversed() {
            (0..count).rev().collect()
        } else {
            (0..count).collect()
        }
    }
}

impl HasFocus for NavigationBarState {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.step_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}
