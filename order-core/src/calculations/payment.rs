//! Surcharge-adjusted totals for the payment review screen.
//!
//! The total is recomputed on every keystroke, so nothing here fails: input
//! that does not start with a number, an empty amount, or no method selected
//! all produce a total of zero.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use order_core::{PaymentMethod, compute_total};
//!
//! assert_eq!(compute_total("100", Some(PaymentMethod::Credit)), dec!(110.00));
//! assert_eq!(compute_total("50,00", Some(PaymentMethod::Delivery)), dec!(65.00));
//! assert_eq!(compute_total("abc", Some(PaymentMethod::Cash)), dec!(0));
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::trace;

use crate::PaymentMethod;

/// Reads a monetary amount typed with a comma as decimal separator.
///
/// The first comma becomes a period, then the longest leading number is
/// taken (`[+-]digits[.digits][e[+-]digits]`), so `"12abc"` reads as 12,
/// `"1.234,56"` as 1.234 and `"1,5e2"` as 150. An `e` without digits after it
/// is not part of the number. Returns `None` when no number leads the text or
/// the exponent pushes the value out of range.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    let normalized = text.trim_start().replacen(',', ".", 1);
    let (mantissa, exponent) = numeric_prefix(&normalized)?;
    Decimal::from_str(&mantissa)
        .inspect_err(|e| trace!(input = %text, "amount out of range: {e}"))
        .ok()
        .and_then(|value| scale_by_power_of_ten(value, exponent))
}

/// Exponents beyond this magnitude either overflow or round to zero.
const EXPONENT_CAP: i32 = 100;

/// Longest prefix of `s` shaped like `[+-]?\d*(\.\d*)?([eE][+-]?\d+)?` with
/// at least one mantissa digit. The mantissa is rewritten so
/// [`Decimal::from_str`] accepts it (`"-.5"` becomes `"-0.5"`, `"5."` becomes
/// `"5"`) and returned with the exponent, clamped to [`EXPONENT_CAP`].
fn numeric_prefix(s: &str) -> Option<(String, i32)> {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let int_digits = &s[int_start..pos];

    let mut frac_digits = "";
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        frac_digits = &s[frac_start..frac_end];
        pos = frac_end;
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut number = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
    if negative {
        number.push('-');
    }
    number.push_str(if int_digits.is_empty() { "0" } else { int_digits });
    if !frac_digits.is_empty() {
        number.push('.');
        number.push_str(frac_digits);
    }
    Some((number, exponent_suffix(&bytes[pos..])))
}

/// Reads `[eE][+-]?\d+` at the start of `bytes`, or 0 when it is not there.
fn exponent_suffix(bytes: &[u8]) -> i32 {
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }
    let (negative, digits) = match bytes.get(1) {
        Some(b'-') => (true, &bytes[2..]),
        Some(b'+') => (false, &bytes[2..]),
        _ => (false, &bytes[1..]),
    };

    let mut magnitude: i32 = 0;
    let mut seen_digit = false;
    for digit in digits.iter().take_while(|b| b.is_ascii_digit()) {
        seen_digit = true;
        magnitude = (magnitude * 10 + i32::from(digit - b'0')).min(EXPONENT_CAP);
    }

    match (seen_digit, negative) {
        (false, _) => 0,
        (true, true) => -magnitude,
        (true, false) => magnitude,
    }
}

/// `value × 10^exponent`; `None` when the result overflows. Underflow rounds
/// to zero.
fn scale_by_power_of_ten(
    value: Decimal,
    exponent: i32,
) -> Option<Decimal> {
    let mut scaled = value;
    for _ in 0..exponent.unsigned_abs() {
        if scaled.is_zero() {
            break;
        }
        scaled = if exponent > 0 {
            scaled.checked_mul(Decimal::TEN)?
        } else {
            scaled.checked_div(Decimal::TEN).unwrap_or(Decimal::ZERO)
        };
    }
    Some(scaled)
}

/// Total after applying the method's surcharge to the typed amount.
///
/// `total = amount × (1 + surcharge% / 100)`. Empty text, text that does not
/// start with a number, no method, or an overflowing product all yield zero.
/// Negative amounts pass through unchanged in sign.
pub fn compute_total(
    raw_amount_text: &str,
    method: Option<PaymentMethod>,
) -> Decimal {
    let Some(method) = method else {
        return Decimal::ZERO;
    };
    if raw_amount_text.is_empty() {
        return Decimal::ZERO;
    }
    parse_amount(raw_amount_text)
        .and_then(|amount| amount.checked_mul(method.surcharge_factor()))
        .unwrap_or(Decimal::ZERO)
}

/// What the operator has typed and picked on the payment screen.
///
/// Lives only while the payment screen is shown; re-entering the screen
/// starts from [`PaymentInput::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentInput {
    pub raw_amount_text: String,
    pub method: Option<PaymentMethod>,
}

impl PaymentInput {
    pub fn set_amount_text(
        &mut self,
        text: impl Into<String>,
    ) {
        self.raw_amount_text = text.into();
    }

    pub fn select_method(
        &mut self,
        method: PaymentMethod,
    ) {
        self.method = Some(method);
    }

    pub fn clear_method(&mut self) {
        self.method = None;
    }

    pub fn total(&self) -> Decimal {
        compute_total(&self.raw_amount_text, self.method)
    }

    /// Both an amount and a method have been given, so a result is shown.
    pub fn is_ready(&self) -> bool {
        !self.raw_amount_text.is_empty() && self.method.is_some()
    }

    /// `"Includes N% surcharge"` when the selected method adds anything.
    pub fn surcharge_note(&self) -> Option<String> {
        self.method
            .map(|m| m.surcharge_percent())
            .filter(|pct| *pct > 0)
            .map(|pct| format!("Includes {pct}% surcharge"))
    }
}
