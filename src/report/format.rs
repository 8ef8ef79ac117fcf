//! Cell value formatting shared by the report specs.

use chrono::NaiveDateTime;

/// Placeholder emitted for absent or empty text values.
pub const PLACEHOLDER: &str = "-";

const CURRENCY_SYMBOL: &str = "$";

/// Format an amount held in minor units (cents) as a currency string,
/// e.g. `129999` -> `"$1,299.99"`.
pub fn format_currency(cents: i64) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let whole = group_thousands(abs / 100);
    let fraction = abs % 100;

    if negative {
        format!("-{CURRENCY_SYMBOL}{whole}.{fraction:02}")
    } else {
        format!("{CURRENCY_SYMBOL}{whole}.{fraction:02}")
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Format a timestamp as `"Jul 07, 2025"`.
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%b %d, %Y").to_string()
}

/// Return the value when it has content, otherwise [`PLACEHOLDER`].
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_status(is_active: bool) -> String {
    if is_active { "Active" } else { "Inactive" }.to_string()
}
