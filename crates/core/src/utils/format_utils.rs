//! Display formatting for currency amounts and percentages.
//!
//! Formatting is presentation-only; calculations stay in `Decimal` and only
//! drop to `f64` here, at the display boundary.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const BILLION: Decimal = dec!(1000000000);
const MILLION: Decimal = dec!(1000000);
const THOUSAND: Decimal = dec!(1000);

/// Formats a currency amount with a K/M/B unit suffix, e.g. `€1.5M`.
pub fn format_currency(amount: Decimal, precision: usize) -> String {
    let magnitude = amount.abs();

    if magnitude >= BILLION {
        format!("€{:.*}B", precision, to_display(amount / BILLION))
    } else if magnitude >= MILLION {
        format!("€{:.*}M", precision, to_display(amount / MILLION))
    } else if magnitude >= THOUSAND {
        format!("€{:.*}K", precision, to_display(amount / THOUSAND))
    } else {
        format!("€{:.*}", precision, to_display(amount))
    }
}

/// Formats a fractional value as a percentage, e.g. `0.15` -> `15.0%`.
pub fn format_percentage(value: Decimal, precision: usize) -> String {
    format!("{:.*}%", precision, to_display(value * dec!(100)))
}

fn to_display(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}
