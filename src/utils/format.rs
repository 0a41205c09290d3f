//! Number formatting in the Indian style used by the dashboards:
//! lakh/crore suffixes and 2-digit grouping above the thousands.

use crate::config::DisplayConfig;

const BILLION: f64 = 1_000_000_000.0;
const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

/// `₹1.2B`, `₹4.5Cr`, `₹3.2L`, `₹7.5K`, otherwise the plain number.
pub fn format_compact(amount: f64, symbol: &str) -> String {
    let scales = [(BILLION, "B"), (CRORE, "Cr"), (LAKH, "L"), (THOUSAND, "K")];

    for (scale, suffix) in scales {
        if amount >= scale {
            return format!("{}{:.1}{}", symbol, amount / scale, suffix);
        }
    }
    format!("{}{}", symbol, amount)
}

/// Whole currency units with Indian digit grouping, e.g. `₹1,23,45,678`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}{}{}", sign, symbol, group_indian(&digits))
}

pub fn format_percentage(value: f64, precision: usize) -> String {
    format!("{:.*}%", precision, value)
}

/// Compact or grouped depending on the display settings
pub fn format_amount(amount: f64, display: &DisplayConfig) -> String {
    if display.compact_numbers {
        format_compact(amount, &display.currency_symbol)
    } else {
        format_currency(amount, &display.currency_symbol)
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
