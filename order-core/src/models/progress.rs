use super::Screen;

/// Number of steps in the progress indicator.
pub const TOTAL_STEPS: u8 = 5;

/// Caption for each step, indexed by `step - 1`.
pub const STEP_LABELS: [&str; TOTAL_STEPS as usize] =
    ["Start", "Customer", "Products", "Payment", "Finish"];

/// Where the operator is in the five-step workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: u8,
    pub total: u8,
}

impl Progress {
    pub fn for_screen(screen: Screen) -> Self {
        Self {
            current: screen.step(),
            total: TOTAL_STEPS,
        }
    }

    pub fn label(&self) -> &'static str {
        STEP_LABELS[usize::from(self.current.clamp(1, TOTAL_STEPS) - 1)]
    }

    /// True for steps already reached, including the current one.
    pub fn is_complete(
        &self,
        step: u8,
    ) -> bool {
        step <= self.current
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn payment_screen_is_step_four_of_five() {
        let progress = Progress::for_screen(Screen::PaymentMethodReview);

        assert_eq!(progress, Progress { current: 4, total: 5 });
        assert_eq!(progress.label(), "Payment");
    }

    #[test]
    fn steps_up_to_current_are_complete() {
        let progress = Progress::for_screen(Screen::InsertNewOrder);

        let complete: Vec<bool> = (1..=TOTAL_STEPS).map(|s| progress.is_complete(s)).collect();

        assert_eq!(complete, vec![true, true, true, false, false]);
    }

    #[test]
    fn every_screen_has_a_label() {
        for screen in Screen::ALL {
            assert!(!Progress::for_screen(screen).label().is_empty());
        }
    }
}
