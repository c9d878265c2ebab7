//! Payment method review.
//!
//! For Line A orders the operator types the base amount and picks a payment
//! method; the surcharge-adjusted total is recomputed on every edit. Line B
//! orders only see their pricing hint.

use cursive::Cursive;
use cursive::view::{Nameable, Resizable};
use cursive::views::{DummyView, EditView, LinearLayout, SelectView, TextView};
use order_core::{Action, PaymentInput, PaymentMethod, Screen, format_brl};

use super::status_bar::{build_status_bar, screen_hints};
use super::{action_menu, header_state, progress_header, screen_dialog};
use crate::content::{line_hint, render_body, screen_content};
use crate::session::GuideSession;

// View names for accessing components
const AMOUNT_FIELD: &str = "payment_amount";
const RESULT_VIEW: &str = "payment_result";

pub fn show_payment_review(siv: &mut Cursive) {
    let screen = Screen::PaymentMethodReview;
    let (progress, can_go_back) = header_state(siv, screen);
    let line = siv
        .with_user_data(|s: &mut GuideSession| s.nav().selected_line())
        .flatten();

    let mut layout = progress_header(progress);
    layout.add_child(TextView::new(render_body(&screen_content(screen))));

    if let Some(line) = line {
        layout.add_child(DummyView.fixed_height(1));
        layout.add_child(TextView::new(format!(
            "Selected line: {line}\n{}",
            line_hint(line)
        )));

        if line.uses_payment_calculator() {
            layout.add_child(DummyView.fixed_height(1));
            layout.add_child(build_calculator());
            layout.add_child(
                TextView::new(format_result(None))
                    .with_name(RESULT_VIEW)
                    .fixed_height(2),
            );
        }
    }

    layout.add_child(DummyView.fixed_height(1));
    layout.add_child(action_menu(vec![Action::Finalize]));
    layout.add_child(DummyView.fixed_height(1));
    layout.add_child(build_status_bar(&screen_hints(can_go_back)));

    siv.add_layer(screen_dialog(screen.title(), layout, can_go_back));
}

fn build_calculator() -> LinearLayout {
    let amount = EditView::new()
        .on_edit(|s, text, _| on_amount_edit(s, text))
        .with_name(AMOUNT_FIELD)
        .fixed_width(14);

    let methods = SelectView::new()
        .with_all(method_rows())
        .on_select(|s, method: &Option<PaymentMethod>| on_method_select(s, *method))
        .on_submit(|s, method: &Option<PaymentMethod>| on_method_select(s, *method));

    LinearLayout::vertical()
        .child(
            LinearLayout::horizontal()
                .child(TextView::new("Product amount  R$ "))
                .child(amount),
        )
        .child(DummyView.fixed_height(1))
        .child(TextView::new("Payment method"))
        .child(methods)
}

/// Select rows for the method list. The highlighted first row stands for
/// "nothing picked yet" so the list agrees with a fresh [`PaymentInput`].
fn method_rows() -> Vec<(String, Option<PaymentMethod>)> {
    std::iter::once(("—".to_string(), None))
        .chain(PaymentMethod::ALL.into_iter().map(|m| {
            (
                format!("{:<10}{:>5}", m.label(), m.surcharge_badge()),
                Some(m),
            )
        }))
        .collect()
}

fn on_amount_edit(
    siv: &mut Cursive,
    text: &str,
) {
    let text = text.to_string();
    siv.with_user_data(|s: &mut GuideSession| {
        if let Some(input) = s.payment_mut() {
            input.set_amount_text(text);
        }
    });
    refresh_result(siv);
}

fn on_method_select(
    siv: &mut Cursive,
    method: Option<PaymentMethod>,
) {
    siv.with_user_data(|s: &mut GuideSession| {
        if let Some(input) = s.payment_mut() {
            match method {
                Some(method) => input.select_method(method),
                None => input.clear_method(),
            }
        }
    });
    refresh_result(siv);
}

fn refresh_result(siv: &mut Cursive) {
    let input = siv
        .with_user_data(|s: &mut GuideSession| s.payment().cloned())
        .flatten();
    let text = format_result(input.as_ref());
    siv.call_on_name(RESULT_VIEW, |v: &mut TextView| v.set_content(text));
}

/// Result panel text. Only shows a price once both amount and method are
/// present.
pub fn format_result(input: Option<&PaymentInput>) -> String {
    match input {
        Some(input) if input.is_ready() => {
            let mut text = format!("Final price: {}", format_brl(input.total()));
            if let Some(note) = input.surcharge_note() {
                text.push('\n');
                text.push_str(&note);
            }
            text
        }
        _ => "Enter an amount and pick a payment method.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prompts_until_amount_and_method_are_given() {
        let mut input = PaymentInput::default();
        input.set_amount_text("100");

        assert_eq!(
            format_result(Some(&input)),
            "Enter an amount and pick a payment method."
        );
        assert_eq!(format_result(None), format_result(Some(&input)));
    }

    #[test]
    fn shows_total_with_surcharge_note() {
        let mut input = PaymentInput::default();
        input.set_amount_text("50,00");
        input.select_method(PaymentMethod::Delivery);

        assert_eq!(
            format_result(Some(&input)),
            "Final price: R$ 65,00\nIncludes 30% surcharge"
        );
    }

    #[test]
    fn no_note_without_surcharge() {
        let mut input = PaymentInput::default();
        input.set_amount_text("20");
        input.select_method(PaymentMethod::Cash);

        assert_eq!(format_result(Some(&input)), "Final price: R$ 20,00");
    }

    #[test]
    fn method_list_starts_on_a_blank_row() {
        let rows = method_rows();

        assert_eq!(rows.len(), PaymentMethod::ALL.len() + 1);
        assert_eq!(rows[0], ("—".to_string(), None));
        assert_eq!(rows[1].1, Some(PaymentMethod::Cash));
        assert_eq!(
            rows.iter().filter_map(|(_, m)| *m).collect::<Vec<_>>(),
            PaymentMethod::ALL.to_vec()
        );
    }

    #[test]
    fn garbage_amount_shows_zero() {
        let mut input = PaymentInput::default();
        input.set_amount_text("abc");
        input.select_method(PaymentMethod::Pix);

        assert_eq!(format_result(Some(&input)), "Final price: R$ 0,00");
    }
}
