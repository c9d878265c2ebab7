//! Entry points behind the `OrderGuide` commands.

use std::fmt::Write;

use anyhow::Result;
use order_core::{PaymentMethod, compute_total, format_brl, parse_amount};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::{session::GuideSession, views};

/// Runs the interactive guide until the operator quits.
///
/// The terminal is taken over for the duration, so stdout logging should
/// be switched off before calling this.
pub fn run_guide() -> Result<()> {
    let mut siv = cursive::crossterm();
    siv.set_user_data(GuideSession::new());
    views::install_global_keys(&mut siv);
    views::show_current_screen(&mut siv);

    info!("guide started");
    siv.try_run()
        .map_err(|e| anyhow::anyhow!("terminal backend failed: {e}"))?;
    info!("guide closed");
    Ok(())
}

/// One-line quote: base amount, method, and surcharge-adjusted total.
pub fn quote(
    raw_amount: &str,
    method: PaymentMethod,
) -> String {
    let Some(amount) = parse_amount(raw_amount) else {
        warn!(input = raw_amount, "amount is not a number, quoting zero");
        return format!("{} ({}): {}", method, method.surcharge_badge(), format_brl(Decimal::ZERO));
    };
    let total = compute_total(raw_amount, Some(method));
    format!(
        "{} + {} ({}): {}",
        format_brl(amount),
        method,
        method.surcharge_badge(),
        format_brl(total)
    )
}

/// The surcharge table, one method per line.
pub fn surcharge_table() -> String {
    let mut out = String::new();
    for method in PaymentMethod::ALL {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{:<10}{:>5}",
            method.key(),
            method.surcharge_badge()
        );
    }
    out
}
