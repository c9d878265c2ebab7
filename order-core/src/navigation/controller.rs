use serde::Serialize;
use tracing::{debug, warn};

use super::{Action, NavigationError, resolve};
use crate::{ProductLine, Progress, Screen};

/// Where the operator is, how they got there, and which product line they
/// picked.
///
/// Only [`NavigationController`] can change it; everything else reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    current: Screen,
    history: Vec<Screen>,
    selected_line: Option<ProductLine>,
}

impl NavigationState {
    pub fn current(&self) -> Screen {
        self.current
    }

    /// Previously visited screens, oldest first. The current screen is
    /// never on it.
    pub fn history(&self) -> &[Screen] {
        &self.history
    }

    pub fn selected_line(&self) -> Option<ProductLine> {
        self.selected_line
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

/// Owner of the guide's [`NavigationState`].
#[derive(Debug, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    /// Start on the home screen with no history and no line selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current(&self) -> Screen {
        self.state.current
    }

    pub fn history(&self) -> &[Screen] {
        &self.state.history
    }

    pub fn selected_line(&self) -> Option<ProductLine> {
        self.state.selected_line
    }

    pub fn can_go_back(&self) -> bool {
        self.state.can_go_back()
    }

    pub fn progress(&self) -> Progress {
        Progress::for_screen(self.state.current)
    }

    /// Move to `target`, pushing the current screen onto the history.
    ///
    /// `line` overwrites the selected product line when given; otherwise the
    /// earlier choice is kept. The target is not checked against the
    /// transition table, use [`perform`](Self::perform) for that.
    pub fn go_to(
        &mut self,
        target: Screen,
        line: Option<ProductLine>,
    ) {
        debug!(from = ?self.state.current, to = ?target, ?line, "navigate");
        self.state.history.push(self.state.current);
        self.state.current = target;
        if let Some(line) = line {
            self.state.selected_line = Some(line);
        }
    }

    /// Return to the previous screen. Does nothing when there is no history.
    ///
    /// The selected product line is not part of the history and is left as is.
    pub fn go_back(&mut self) -> Option<Screen> {
        let previous = self.state.history.pop()?;
        debug!(from = ?self.state.current, to = ?previous, "back");
        self.state.current = previous;
        Some(previous)
    }

    /// Back to the initial state: home, empty history, no line.
    pub fn reset(&mut self) {
        debug!(from = ?self.state.current, "reset");
        self.state = NavigationState::default();
    }

    /// Carry out `action` from the current screen, if the transition table
    /// allows it. On error the state is unchanged.
    pub fn perform(
        &mut self,
        action: Action,
    ) -> Result<Screen, NavigationError> {
        let transition = resolve(self.state.current, action, self.state.selected_line)
            .inspect_err(|e| warn!(screen = ?self.state.current, %action, "rejected: {e}"))?;
        self.go_to(transition.target, transition.line);
        Ok(transition.target)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn controller_at_payment(line: ProductLine) -> NavigationController {
        let mut nav = NavigationController::new();
        nav.perform(Action::HasRecord).unwrap();
        nav.perform(Action::InsertOrder).unwrap();
        nav.perform(Action::PickLine(line)).unwrap();
        nav
    }

    #[test]
    fn starts_at_home_with_nothing_selected() {
        let nav = NavigationController::new();

        assert_eq!(nav.current(), Screen::Home);
        assert!(nav.history().is_empty());
        assert_eq!(nav.selected_line(), None);
        assert!(!nav.can_go_back());
    }

    #[test]
    fn go_to_pushes_previous_screen_not_target() {
        let mut nav = NavigationController::new();

        nav.go_to(Screen::Lookup, None);

        assert_eq!(nav.current(), Screen::Lookup);
        assert_eq!(nav.history(), &[Screen::Home]);
    }

    #[test]
    fn go_to_without_line_keeps_earlier_choice() {
        let mut nav = NavigationController::new();
        nav.go_to(Screen::PaymentMethodReview, Some(ProductLine::LineB));

        nav.go_to(Screen::LineBDetail, None);

        assert_eq!(nav.selected_line(), Some(ProductLine::LineB));
    }

    #[test]
    fn go_back_on_empty_history_is_a_no_op() {
        let mut nav = NavigationController::new();

        assert_eq!(nav.go_back(), None);
        assert_eq!(nav.state(), &NavigationState::default());
    }

    #[test]
    fn go_back_pops_exactly_one_screen() {
        let mut nav = controller_at_payment(ProductLine::LineA);

        assert_eq!(nav.go_back(), Some(Screen::InsertExistingOrder));
        assert_eq!(nav.history(), &[Screen::Home, Screen::Lookup]);
    }

    #[test]
    fn go_back_does_not_roll_back_line() {
        let mut nav = controller_at_payment(ProductLine::LineA);

        nav.go_back();

        assert_eq!(nav.current(), Screen::InsertExistingOrder);
        assert_eq!(nav.selected_line(), Some(ProductLine::LineA));
    }

    #[test]
    fn detail_and_back_returns_to_payment_with_line_kept() {
        let mut nav = controller_at_payment(ProductLine::LineA);

        assert_eq!(nav.perform(Action::Finalize), Ok(Screen::LineADetail));
        nav.go_back();

        assert_eq!(nav.current(), Screen::PaymentMethodReview);
        assert_eq!(nav.selected_line(), Some(ProductLine::LineA));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut nav = controller_at_payment(ProductLine::LineB);
        nav.perform(Action::Finalize).unwrap();

        nav.reset();

        assert_eq!(nav.state(), &NavigationState::default());
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn rejected_action_leaves_state_untouched() {
        let mut nav = NavigationController::new();
        nav.go_to(Screen::PaymentMethodReview, None);
        let before = nav.state().clone();

        let err = nav.perform(Action::Finalize).unwrap_err();

        assert_eq!(err, NavigationError::NoLineSelected);
        assert_eq!(nav.state(), &before);
    }

    #[test]
    fn progress_follows_current_screen() {
        let nav = controller_at_payment(ProductLine::LineB);

        assert_eq!(nav.progress().current, 4);
    }
}
