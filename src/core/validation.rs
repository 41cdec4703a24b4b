//! Produce code validation and record normalization

use once_cell::sync::Lazy;
use regex::Regex;

// Four hyphen-separated groups of four alphanumerics, anchored on both ends
static PRODUCE_CODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]{4}-[A-Za-z0-9]{4}-[A-Za-z0-9]{4}-[A-Za-z0-9]{4}$")
        .expect("Invalid produce code regex")
});

/// Check whether a produce code has the `XXXX-XXXX-XXXX-XXXX` shape
pub fn is_valid_produce_code(produce_code: &str) -> bool {
    PRODUCE_CODE_PATTERN.is_match(produce_code)
}

/// Canonical (upper-case) form of a produce code, used as the store key
pub fn normalize_produce_code(produce_code: &str) -> String {
    produce_code.to_uppercase()
}

/// Round a unit price to cents, halves away from zero
///
/// Prices are binary floats, so a value such as `1.005` (really
/// `1.00499999...`) rounds down to `1.0`.
pub fn round_unit_price(unit_price: f64) -> f64 {
    (unit_price * 100.0).round() / 100.0
}
