//! Text progress indicator shown at the top of every screen.

use order_core::{Progress, STEP_LABELS};

/// `● Start ─ ● Customer ─ ○ Products ─ ○ Payment ─ ○ Finish`
pub fn progress_line(progress: Progress) -> String {
    (1..=progress.total)
        .zip(STEP_LABELS)
        .map(|(step, label)| {
            let marker = if progress.is_complete(step) { '●' } else { '○' };
            format!("{marker} {label}")
        })
        .collect::<Vec<_>>()
        .join(" ─ ")
}

/// `Step 2 of 5: Customer`
pub fn step_caption(progress: Progress) -> String {
    format!(
        "Step {} of {}: {}",
        progress.current,
        progress.total,
        progress.label()
    )
}

#[cfg(test)]
mod tests {
    use order_core::Screen;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fills_markers_up_to_current_step() {
        let line = progress_line(Progress::for_screen(Screen::RegisterNewCustomer));

        assert_eq!(line, "● Start ─ ● Customer ─ ○ Products ─ ○ Payment ─ ○ Finish");
    }

    #[test]
    fn final_screens_fill_everything() {
        let line = progress_line(Progress::for_screen(Screen::LineBDetail));

        assert!(!line.contains('○'));
    }

    #[test]
    fn caption_names_the_step() {
        assert_eq!(
            step_caption(Progress::for_screen(Screen::PaymentMethodReview)),
            "Step 4 of 5: Payment"
        );
    }
}
