//! Read-only projection of wizard state onto the navigation bar.
//!
//! The view borrows the wizard and recomputes every answer from it on each
//! call, so it always reflects the latest state the wizard owner wrote.

use stepwise_types::{NavigationMode, WizardState, WizardStep};

use super::{Direction, StepClasses};

/// Navigation bar logic over a borrowed wizard.
pub struct NavigationBarView<'a, W: WizardState + ?Sized> {
    wizard_state: &'a W,
    direction: Direction,
}

impl<'a, W: WizardState + ?Sized> NavigationBarView<'a, W> {
    /// Creates a left-to-right view over `wizard_state`.
    pub fn new(wizard_state: &'a W) -> Self {
        Self {
            wizard_state,
            direction: Direction::default(),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn wizard_state(&self) -> &'a W {
        self.wizard_state
    }

    /// The wizard's navigation mode, unchanged.
    pub fn navigation_mode(&self) -> &'a dyn NavigationMode {
        self.wizard_state.navigation_mode()
    }

    /// Steps in display order: reversed for right-to-left, otherwise the
    /// wizard's own order. The wizard's sequence is never touched.
    pub fn wizard_steps(&self) -> Vec<&'a W::Step> {
        let steps = self.wizard_state.wizard_steps();
        if self.direction.is_reversed() {
            steps.iter().rev().collect()
        } else {
            steps.iter().collect()
        }
    }

    /// Wizard index for each display position.
    pub fn display_indices(&self) -> Vec<usize> {
        let count = self.number_of_wizard_steps();
        if self.direction.is_reversed() {
            (0..count).rev().collect()
        } else {
            (0..count).collect()
        }
    }

    pub fn number_of_wizard_steps(&self) -> usize {
        self.wizard_state.wizard_steps().len()
    }

    pub fn is_current(&self, step: &W::Step) -> bool {
        step.selected() && !step.completed() && !self.wizard_state.completed()
    }

    pub fn is_done(&self, step: &W::Step) -> bool {
        (step.completed() && !step.selected()) || self.wizard_state.completed()
    }

    pub fn is_default(&self, step: &W::Step) -> bool {
        !step.optional() && !step.completed() && !step.selected() && !self.wizard_state.completed()
    }

    pub fn is_editing(&self, step: &W::Step) -> bool {
        step.selected() && step.completed() && !self.wizard_state.completed()
    }

    pub fn is_optional(&self, step: &W::Step) -> bool {
        step.optional() && !step.completed() && !step.selected() && !self.wizard_state.completed()
    }

    /// Whether clicking `step` may jump to it. Steps that do not belong to
    /// the wizard are never navigable.
    pub fn is_navigable(&self, step: &W::Step) -> bool {
        !step.selected()
            && !self.wizard_state.disable_navigation_bar()
            && self
                .wizard_state
                .index_of_step(step)
                .is_some_and(|index| self.navigation_mode().is_navigable(index))
    }

    pub fn classes(&self, step: &W::Step) -> StepClasses {
        StepClasses {
            default: self.is_default(step),
            current: self.is_current(step),
            done: self.is_done(step),
            editing: self.is_editing(step),
            optional: self.is_optional(step),
            navigable: self.is_navigable(step),
        }
    }

    /// Classes of every step in display order.
    pub fn step_classes(&self) -> Vec<StepClasses> {
        self.wizard_steps().into_iter().map(|step| self.classes(step)).collect()
    }
}

impl<W: WizardState + ?Sized> Clone for NavigationBarView<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: WizardState + ?Sized> Copy for NavigationBarView<'_, W> {}

impl<W: WizardState + ?Sized> std::fmt::Debug for NavigationBarView<'_, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationBarView")
            .field("direction", &self.direction)
            .field("number_of_wizard_steps", &self.number_of_wizard_steps())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use stepwise_types::{StepRecord, WizardModel};

    use super::*;

    /// Wizard double that records which indices the navigation mode was asked about.
    struct RecordingMode {
        allowed: Vec<usize>,
        queries: RefCell<Vec<usize>>,
    }

    impl NavigationMode for RecordingMode {
        fn is_navigable(&self, index: usize) -> bool {
            self.queries.borrow_mut().push(index);
            self.allowed.contains(&index)
        }
    }

    struct FakeStep {
        selected: bool,
        completed: bool,
        optional: bool,
    }

    impl WizardStep for FakeStep {
        fn selected(&self) -> bool {
            self.selected
        }
        fn completed(&self) -> bool {
            self.completed
        }
        fn optional(&self) -> bool {
            self.optional
        }
        fn title(&self) -> &str {
            "fake"
        }
    }

    struct FakeWizard {
        steps: Vec<FakeStep>,
        mode: RecordingMode,
        completed: bool,
        disable_navigation_bar: bool,
    }

    impl WizardState for FakeWizard {
        type Step = FakeStep;

        fn wizard_steps(&self) -> &[FakeStep] {
            &self.steps
        }
        fn navigation_mode(&self) -> &dyn NavigationMode {
            &self.mode
        }
        fn completed(&self) -> bool {
            self.completed
        }
        fn disable_navigation_bar(&self) -> bool {
            self.disable_navigation_bar
        }
    }

    fn step(selected: bool, completed: bool, optional: bool) -> FakeStep {
        FakeStep {
            selected,
            completed,
            optional,
        }
    }

    /// Every combination of step flags.
    fn all_flag_combinations() -> Vec<FakeStep> {
        let mut steps = Vec::new();
        for bits in 0..8u8 {
            steps.push(step(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0));
        }
        steps
    }

    fn fake_wizard(steps: Vec<FakeStep>, completed: bool) -> FakeWizard {
        FakeWizard {
            steps,
            mode: RecordingMode {
                allowed: (0..16).collect(),
                queries: RefCell::new(Vec::new()),
            },
            completed,
            disable_navigation_bar: false,
        }
    }

    fn scenario() -> WizardModel {
        WizardModel::new(vec![
            StepRecord::new("A").as_completed(),
            StepRecord::new("B").as_selected(),
            StepRecord::new("C").as_optional(),
        ])
    }

    #[test]
    fn completed_wizard_marks_every_step_done() {
        let wizard = fake_wizard(all_flag_combinations(), true);
        let view = NavigationBarView::new(&wizard);
        for step in view.wizard_steps() {
            assert!(view.is_done(step));
            assert!(!view.is_current(step));
            assert!(!view.is_default(step));
            assert!(!view.is_editing(step));
            assert!(!view.is_optional(step));
        }
    }

    #[test]
    fn selected_incomplete_step_is_only_current() {
        for optional in [false, true] {
            let wizard = fake_wizard(vec![step(true, false, optional)], false);
            let view = NavigationBarView::new(&wizard);
            let only = &wizard.steps[0];
            assert!(view.is_current(only));
            assert!(!view.is_done(only));
            assert!(!view.is_default(only));
            assert!(!view.is_editing(only));
            assert!(!view.is_optional(only));
        }
    }

    #[test]
    fn selected_completed_step_is_only_editing() {
        for optional in [false, true] {
            let wizard = fake_wizard(vec![step(true, true, optional)], false);
            let view = NavigationBarView::new(&wizard);
            let only = &wizard.steps[0];
            assert!(view.is_editing(only));
            assert!(!view.is_done(only));
            assert!(!view.is_current(only));
            assert!(!view.is_default(only));
            assert!(!view.is_optional(only));
        }
    }

    #[test]
    fn current_and_done_never_overlap() {
        for completed in [false, true] {
            let wizard = fake_wizard(all_flag_combinations(), completed);
            let view = NavigationBarView::new(&wizard);
            for step in view.wizard_steps() {
                assert!(!(view.is_current(step) && view.is_done(step)));
            }
        }
    }

    #[test]
    fn right_to_left_reverses_without_accumulating() {
        let wizard = scenario();
        let view = NavigationBarView::new(&wizard).with_direction(Direction::RightToLeft);

        let titles = |steps: Vec<&StepRecord>| steps.iter().map(|step| step.title.clone()).collect::<Vec<_>>();
        assert_eq!(titles(view.wizard_steps()), vec!["C", "B", "A"]);
        assert_eq!(titles(view.wizard_steps()), vec!["C", "B", "A"]);
        assert_eq!(view.display_indices(), vec![2, 1, 0]);
        assert_eq!(titles(wizard.steps().iter().collect()), vec!["A", "B", "C"]);
        assert_eq!(view.number_of_wizard_steps(), 3);
    }

    #[test]
    fn unknown_direction_attribute_keeps_wizard_order() {
        let wizard = scenario();
        let view = NavigationBarView::new(&wizard).with_direction(Direction::from_attribute("sideways"));
        assert_eq!(view.display_indices(), vec![0, 1, 2]);
        assert!(std::ptr::eq(view.wizard_steps()[0], &wizard.steps()[0]));
    }

    #[test]
    fn scenario_classifies_each_step() {
        let wizard = scenario();
        let view = NavigationBarView::new(&wizard);
        let steps = view.wizard_steps();
        let (a, b, c) = (steps[0], steps[1], steps[2]);

        assert_eq!(a.title, "A");
        assert!(view.is_done(a));
        assert!(view.is_current(b));
        assert!(view.is_optional(c));
        assert!(!view.is_default(c));

        assert_eq!(view.classes(a).class_names(), vec!["done", "navigable"]);
        assert_eq!(view.classes(b).class_names(), vec!["current"]);
        assert_eq!(view.classes(c).class_names(), vec!["optional", "navigable"]);
    }

    #[test]
    fn disabled_bar_blocks_navigation_regardless_of_mode() {
        let mut wizard = fake_wizard(vec![step(false, false, false), step(false, true, false)], false);
        wizard.disable_navigation_bar = true;
        let view = NavigationBarView::new(&wizard);
        for step in view.wizard_steps() {
            assert!(!view.is_navigable(step));
        }
    }

    #[test]
    fn navigable_asks_the_mode_with_the_wizard_index() {
        let mut wizard = fake_wizard(vec![step(false, true, false), step(true, false, false), step(false, false, false)], false);
        wizard.mode.allowed = vec![0];
        let view = NavigationBarView::new(&wizard).with_direction(Direction::RightToLeft);

        let navigable: Vec<bool> = view.wizard_steps().into_iter().map(|step| view.is_navigable(step)).collect();
        assert_eq!(navigable, vec![false, false, true]);
        // The selected step short-circuits before the mode is consulted.
        assert_eq!(*wizard.mode.queries.borrow(), vec![2, 0]);
    }

    #[test]
    fn foreign_steps_are_not_navigable() {
        let wizard = scenario();
        let view = NavigationBarView::new(&wizard);
        let stranger = StepRecord::new("A").as_completed();
        assert!(!view.is_navigable(&stranger));
        assert!(view.is_done(&stranger));
    }

    #[test]
    fn predicates_follow_live_state() {
        let mut wizard = scenario();
        {
            let view = NavigationBarView::new(&wizard);
            assert!(view.is_current(&wizard.steps()[1]));
        }
        wizard.complete_selected();
        let view = NavigationBarView::new(&wizard);
        assert!(view.is_done(&wizard.steps()[1]));
        assert!(view.is_current(&wizard.steps()[2]));
        assert_eq!(view.step_classes().len(), 3);
    }

    #[test]
    fn navigation_mode_is_passed_through() {
        let wizard = scenario().with_navigation_mode(|index: usize| index == 2);
        let view = NavigationBarView::new(&wizard);
        assert!(view.navigation_mode().is_navigable(2));
        assert!(!view.navigation_mode().is_navigable(0));
        assert!(!view.is_navigable(&wizard.steps()[0]));
    }
}
