//! Display formatting in the business's en-ZA conventions.

use chrono::{DateTime, Utc};

/// Format an amount as South African rand: `R 12 345.67`.
///
/// Thousands group with spaces per the en-ZA convention; the decimal mark
/// stays a point, matching the printed documents. Negative amounts read
/// `-R 200.00`.
pub fn format_zar(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{sign}R {grouped}.{frac:02}")
}

/// Format a timestamp as an en-ZA short date: `5 Aug 2026`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}
