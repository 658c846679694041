//! Display formatting for valuations and quantities

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// US-dollar amount with thousands separators and no cents: `$557,500`
pub fn format_usd(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${}", group_thousands(&rounded.abs().trunc().to_string()))
}

/// Chart axis label in whole thousands, rounded down: `557k`
pub fn format_axis_thousands(value: Decimal) -> String {
    format!("{}k", (value / dec!(1000)).floor())
}

/// Quantity without trailing zeros: `2.50` becomes `2.5`, `2.0` becomes `2`
pub fn format_quantity(value: Decimal) -> String {
    value.normalize().to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
