//! Operand literals: unsigned decimal or `0x`-prefixed hexadecimal.

use crate::error::LiteralError;

/// Parse an operand literal. `"553"` and `"0x229"` both give 553.
pub fn parse_number(token: &str) -> Result<u64, LiteralError> {
    let t = token.trim();
    match t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
        Some(hex) => parse_radix(hex, 16),
        None => parse_radix(t, 10),
    }
}

/// True when `token` is spelled like a literal attempt (leading digit),
/// whether or not it is well formed.
pub fn looks_numeric(token: &str) -> bool {
    token
        .trim()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

fn parse_radix(digits: &str, radix: u32) -> Result<u64, LiteralError> {
    if digits.is_empty() {
        return Err(LiteralError::Empty);
    }
    // Validate digits ourselves so a sign or stray character is reported
    // as such instead of folding into a generic parse failure.
    if let Some(bad) = digits.chars().find(|c| !c.is_digit(radix)) {
        return Err(LiteralError::InvalidDigit(bad));
    }
    u64::from_str_radix(digits, radix).map_err(|_| LiteralError::OutOfRange)
}
