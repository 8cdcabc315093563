use crate::error::{PepeError, Result};

/// Parses a pepe id, picking the base from its prefix.
///
/// `0x` is hex, `0o` octal, `0b` binary and anything else decimal. Digit
/// separators (`_`) are ignored.
pub fn parse_pepe_id(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else {
        (lower.as_str(), 10)
    };

    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    if digits.is_empty() {
        return Err(PepeError::InvalidId(format!("{:?} has no digits", input)));
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_digit(radix)) {
        return Err(PepeError::InvalidId(format!(
            "{:?}: {:?} is not a base-{} digit",
            input, bad, radix
        )));
    }

    u64::from_str_radix(&digits, radix)
        .map_err(|e| PepeError::InvalidId(format!("{:?}: {}", input, e)))
}
