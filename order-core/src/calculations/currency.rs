//! Display formatting for Brazilian real amounts.

use rust_decimal::Decimal;

use super::common::round_half_up;

/// Formats `amount` as `R$ 1.234,56`: period thousands grouping, comma
/// decimal separator, always two decimal places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use order_core::format_brl;
///
/// assert_eq!(format_brl(dec!(1234.5)), "R$ 1.234,50");
/// assert_eq!(format_brl(dec!(-65)), "R$ -65,00");
/// ```
pub fn format_brl(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let plain = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("R$ {sign}{},{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(format_brl(dec!(110)), "R$ 110,00");
        assert_eq!(format_brl(dec!(65.5)), "R$ 65,50");
    }

    #[test]
    fn groups_thousands_with_periods() {
        assert_eq!(format_brl(dec!(1000)), "R$ 1.000,00");
        assert_eq!(format_brl(dec!(1234567.891)), "R$ 1.234.567,89");
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_brl(dec!(-0.001)), "R$ 0,00");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_brl(dec!(-1500.25)), "R$ -1.500,25");
    }

    #[test]
    fn rounds_half_up_before_formatting() {
        assert_eq!(format_brl(dec!(0.125)), "R$ 0,13");
    }
}
