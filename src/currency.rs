//! Static, approximate exchange rates relative to USD.

use crate::error::{Result, TrackerError};

pub const DEFAULT_CURRENCY: &str = "USD";

// (code, units per USD, symbol)
const CURRENCIES: &[(&str, f64, &str)] = &[
    ("USD", 1.0, "$"),
    ("EUR", 0.92, "\u{20ac}"),
    ("GBP", 0.79, "\u{a3}"),
    ("JPY", 149.5, "\u{a5}"),
    ("INR", 83.2, "\u{20b9}"),
    ("CNY", 7.24, "\u{a5}"),
    ("AUD", 1.52, "A$"),
    ("CAD", 1.36, "C$"),
];

pub fn codes() -> impl Iterator<Item = &'static str> {
    CURRENCIES.iter().map(|c| c.0)
}

pub fn rate(code: &str) -> Option<f64> {
    CURRENCIES.iter().find(|c| c.0 == code).map(|c| c.1)
}

pub fn symbol(code: &str) -> Option<&'static str> {
    CURRENCIES.iter().find(|c| c.0 == code).map(|c| c.2)
}

/// `amount / rate[from] * rate[to]`. Unknown codes produce NaN.
pub fn convert(amount: f64, from: &str, to: &str) -> f64 {
    if from == to {
        return amount;
    }
    let from_rate = rate(from).unwrap_or(f64::NAN);
    let to_rate = rate(to).unwrap_or(f64::NAN);
    amount / from_rate * to_rate
}

/// Standalone converter: rejects non-positive amounts and unknown codes.
pub fn convert_checked(amount: f64, from: &str, to: &str) -> Result<f64> {
    if amount.is_nan() || amount <= 0.0 {
        return Err(TrackerError::Validation(
            "Please enter a valid amount to convert.".to_string(),
        ));
    }
    for code in [from, to] {
        if rate(code).is_none() {
            let supported: Vec<&str> = codes().collect();
            return Err(TrackerError::Validation(format!(
                "Unsupported currency: {code} (supported: {})",
                supported.join(", ")
            )));
        }
    }
    Ok(convert(amount, from, to))
}
