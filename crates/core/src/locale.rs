//! Display formatting for the single supported locale (vi-VN): thousands
//! grouped with `.`, dates as day/month/year. A display concern only; the
//! data model stays locale-free.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Formats an amount in đồng: grouped thousands, `đ` suffix.
/// Amounts are whole đồng; any fractional part is dropped.
pub fn format_vnd(amount: Decimal) -> String {
    format!("{}đ", group_thousands(amount))
}

/// `dd/MM/yyyy`, the vi-VN short date.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn group_thousands(amount: Decimal) -> String {
    let whole = amount.trunc().to_string();
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", whole.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}")
}
