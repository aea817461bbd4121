//! Brazilian-style number formatting for terminal output.

use calc_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Inserts `.` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a value with two decimals, `,` as decimal mark and `.` between
/// thousands, e.g. `1.234,56`.
pub fn format_number(value: Decimal) -> String {
    let rounded = round_half_up(value);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    format!("{sign}{},{frac_part}", group_thousands(int_part))
}

/// Formats a monetary amount in reais, e.g. `R$ 8.154,41`.
pub fn format_brl(value: Decimal) -> String {
    let number = format_number(value);
    match number.strip_prefix('-') {
        Some(magnitude) => format!("-R$ {magnitude}"),
        None => format!("R$ {number}"),
    }
}

/// Formats a rate in [0, 1] as a percentage, e.g. `0.075` → `7,5%`.
pub fn format_percent(rate: Decimal) -> String {
    let percent = (rate * Decimal::ONE_HUNDRED).normalize();
    format!("{}%", percent.to_string().replace('.', ","))
}
