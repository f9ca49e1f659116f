use regex::Regex;
use thiserror::Error;

lazy_static::lazy_static! {
    static ref PRICE_REGEX: Regex = Regex::new(r"^Rs\.\s*([0-9][0-9,]*(?:\.[0-9]+)?)$").unwrap();
}

#[derive(Error, Debug, PartialEq)]
pub enum PriceParseError {
    #[error("price text '{0}' does not match the expected \"Rs. 1,234\" format")]
    Malformed(String),

    #[error("price text '{0}' is out of range")]
    OutOfRange(String),
}

/// Highest unit price a catalog entry may carry. Keeps line totals well
/// inside the range the display formatter can group exactly.
const MAX_PRICE: f64 = 1_000_000_000_000.0;

/// Parse a displayed price like `"Rs. 1,234"` into its numeric value.
///
/// The currency prefix and grouping commas are stripped before parsing.
/// Anything outside the grammar is rejected rather than coerced, so a
/// malformed product node can never leak a non-numeric price into totals.
pub fn parse_price(raw: &str) -> Result<f64, PriceParseError> {
    let captures = PRICE_REGEX
        .captures(raw.trim())
        .ok_or_else(|| PriceParseError::Malformed(raw.to_string()))?;

    let digits = captures[1].replace(',', "");
    let value: f64 = digits
        .parse()
        .map_err(|_| PriceParseError::Malformed(raw.to_string()))?;

    if !value.is_finite() || value > MAX_PRICE {
        return Err(PriceParseError::OutOfRange(raw.to_string()));
    }

    Ok(value)
}
