use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a string does not name a [`PaymentMethod`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment method '{0}' (expected one of: cash, pix, debit, credit, invoice, delivery)")]
pub struct ParseMethodError(String);

/// How the customer pays. Each method carries a fixed surcharge.
///
/// | method   | surcharge |
/// |----------|-----------|
/// | cash     | 0%        |
/// | pix      | 5%        |
/// | debit    | 5%        |
/// | credit   | 10%       |
/// | invoice  | 0%        |
/// | delivery | 30%       |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Pix,
    Debit,
    Credit,
    Invoice,
    Delivery,
}

impl PaymentMethod {
    /// Display order on the payment screen.
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::Cash,
        PaymentMethod::Pix,
        PaymentMethod::Debit,
        PaymentMethod::Credit,
        PaymentMethod::Invoice,
        PaymentMethod::Delivery,
    ];

    /// Whole-number percentage added on top of the base amount.
    pub fn surcharge_percent(&self) -> u32 {
        match self {
            PaymentMethod::Cash => 0,
            PaymentMethod::Pix => 5,
            PaymentMethod::Debit => 5,
            PaymentMethod::Credit => 10,
            PaymentMethod::Invoice => 0,
            PaymentMethod::Delivery => 30,
        }
    }

    /// Multiplier applied to the base amount, e.g. `1.10` for credit.
    pub fn surcharge_factor(&self) -> Decimal {
        Decimal::ONE + Decimal::from(self.surcharge_percent()) / Decimal::ONE_HUNDRED
    }

    pub fn key(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Pix => "pix",
            PaymentMethod::Debit => "debit",
            PaymentMethod::Credit => "credit",
            PaymentMethod::Invoice => "invoice",
            PaymentMethod::Delivery => "delivery",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Debit => "Debit",
            PaymentMethod::Credit => "Credit",
            PaymentMethod::Invoice => "Invoice",
            PaymentMethod::Delivery => "Delivery",
        }
    }

    /// Short badge shown next to the method, `"0%"` or `"+N%"`.
    pub fn surcharge_badge(&self) -> String {
        match self.surcharge_percent() {
            0 => "0%".to_string(),
            n => format!("+{n}%"),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.key() == key)
            .ok_or_else(|| ParseMethodError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn surcharge_table_is_fixed() {
        let table: Vec<(&str, u32)> = PaymentMethod::ALL
            .iter()
            .map(|m| (m.key(), m.surcharge_percent()))
            .collect();

        assert_eq!(
            table,
            vec![
                ("cash", 0),
                ("pix", 5),
                ("debit", 5),
                ("credit", 10),
                ("invoice", 0),
                ("delivery", 30),
            ]
        );
    }

    #[test]
    fn surcharge_factor_is_exact() {
        assert_eq!(PaymentMethod::Credit.surcharge_factor(), dec!(1.10));
        assert_eq!(PaymentMethod::Delivery.surcharge_factor(), dec!(1.30));
        assert_eq!(PaymentMethod::Cash.surcharge_factor(), dec!(1));
    }

    #[test]
    fn badges_show_plus_only_for_surcharges() {
        assert_eq!(PaymentMethod::Cash.surcharge_badge(), "0%");
        assert_eq!(PaymentMethod::Pix.surcharge_badge(), "+5%");
        assert_eq!(PaymentMethod::Delivery.surcharge_badge(), "+30%");
    }

    #[test]
    fn parses_keys_case_insensitively() {
        assert_eq!("credit".parse::<PaymentMethod>(), Ok(PaymentMethod::Credit));
        assert_eq!(" PIX ".parse::<PaymentMethod>(), Ok(PaymentMethod::Pix));
    }

    #[test]
    fn rejects_unknown_method() {
        let err = "cheque".parse::<PaymentMethod>().unwrap_err();

        assert!(err.to_string().contains("cheque"));
    }
}
