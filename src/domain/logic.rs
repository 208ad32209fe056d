// src/domain/logic.rs

use super::unit::{TransactionType, Unit};

/// Marker used by legacy rental listings in their price text.
pub const RENTAL_PRICE_MARKER: &str = "/month";

/// Classifies a unit as a sale or a rental.
///
/// The explicit `transaction_type` field wins. Legacy records without it are
/// classified from the price text: anything quoted per month is a rental.
pub fn classify_transaction_type(unit: &Unit) -> TransactionType {
    if let Some(kind) = unit.transaction_type {
        return kind;
    }
    if unit.price.contains(RENTAL_PRICE_MARKER) {
        TransactionType::Rental
    } else {
        TransactionType::Sale
    }
}

/// Parses the first number out of display text such as `"$1,000,000"`,
/// `"$4,500/month"`, `"1,200 sqft"` or `"TOP 2026"`.
///
/// Currency symbols and thousands separators are dropped. Text with no
/// number, or a malformed one, yields `0.0` so one bad record cannot break
/// a whole filter or sort pass.
pub fn parse_amount(text: &str) -> f64 {
    let start = match text.find(|c: char| c.is_ascii_digit()) {
        Some(idx) => idx,
        None => return 0.0,
    };

    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .filter(|c| *c != ',')
        .collect();

    digits.trim_end_matches('.').parse::<f64>().unwrap_or(0.0)
}

/// Inserts thousands separators: `1234567` -> `"1,234,567"`.
pub fn group_thousands(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `"$2.8M"` for a single value, `"$2.0M - $3.0M"` otherwise.
pub fn format_price_range(min: f64, max: f64) -> String {
    let millions = |v: f64| format!("${:.1}M", v / 1_000_000.0);
    if min == max {
        millions(min)
    } else {
        format!("{} - {}", millions(min), millions(max))
    }
}

/// `"1,200 sqft"` for a single value, `"1,200 - 1,500 sqft"` otherwise.
pub fn format_size_range(min: f64, max: f64) -> String {
    let sqft = |v: f64| group_thousands(v.round().max(0.0) as u64);
    if min == max {
        format!("{} sqft", sqft(min))
    } else {
        format!("{} - {} sqft", sqft(min), sqft(max))
    }
}
