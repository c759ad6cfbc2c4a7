//! Parsing and validation of user-entered arrays, targets and tree values

use crate::config::{MAX_ARRAY_SIZE, MAX_ARRAY_VALUE, MAX_BST_VALUE, MIN_BST_VALUE};
use crate::errors::InputError;

/// Parse comma-separated positive integers.
///
/// Each token is read by its leading integer (`"12px"` reads as 12).
/// Tokens without one, and non-positive values, are dropped. Values above
/// [`MAX_ARRAY_VALUE`] are clamped to it, and only the first
/// [`MAX_ARRAY_SIZE`] values are kept.
pub fn parse_custom_array(text: &str) -> Result<Vec<u32>, InputError> {
    let mut values: Vec<u32> = text
        .split(',')
        .filter_map(leading_int)
        .filter(|&n| n > 0)
        .map(|n| n.min(MAX_ARRAY_VALUE as i64) as u32)
        .collect();

    if values.is_empty() {
        tracing::warn!(input = text, "rejected custom array");
        return Err(InputError::EmptyArray);
    }

    if values.len() > MAX_ARRAY_SIZE {
        tracing::warn!(len = values.len(), max = MAX_ARRAY_SIZE, "truncated custom array");
        values.truncate(MAX_ARRAY_SIZE);
    }

    Ok(values)
}

/// Parse a search target in `[1, MAX_ARRAY_VALUE]`
pub fn parse_target(text: &str) -> Result<u32, InputError> {
    let value = parse_integer(text)?;
    if value < 1 || value > MAX_ARRAY_VALUE as i64 {
        return Err(InputError::TargetOutOfRange {
            value,
            min: 1,
            max: MAX_ARRAY_VALUE,
        });
    }
    Ok(value as u32)
}

/// Check a BST operation value against `[MIN_BST_VALUE, MAX_BST_VALUE]`
pub fn validate_bst_value(value: i64) -> Result<u32, InputError> {
    if value < MIN_BST_VALUE as i64 || value > MAX_BST_VALUE as i64 {
        return Err(InputError::ValueOutOfRange {
            value,
            min: MIN_BST_VALUE,
            max: MAX_BST_VALUE,
        });
    }
    Ok(value as u32)
}

/// Leading integer of `text`, e.g. `"42abc"` reads as 42
pub fn parse_integer(text: &str) -> Result<i64, InputError> {
    leading_int(text).ok_or_else(|| InputError::InvalidNumber {
        text: text.trim().to_string(),
    })
}

/// Leading optionally-signed integer of a trimmed token, saturating on overflow
fn leading_int(token: &str) -> Option<i64> {
    let token = token.trim();
    let (negative, digits) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => {
                seen_digit = true;
                value = value.saturating_mul(10).saturating_add(d as i64);
            }
            None => break,
        }
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}
