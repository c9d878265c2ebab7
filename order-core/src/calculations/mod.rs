//! Money calculations for the payment review screen.
//!
//! Amounts are [`rust_decimal::Decimal`] end to end; the only rounding
//! happens when a total is formatted for display.

pub mod common;
pub mod currency;
pub mod payment;

pub use currency::format_brl;
pub use payment::{PaymentInput, compute_total, parse_amount};
