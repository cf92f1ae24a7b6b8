use crate::error::{CareError, CareResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> CareResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(CareError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Validates that an integer is positive (> 0).
pub fn positive(value: i64, field: &str) -> CareResult<i64> {
    if value <= 0 {
        Err(CareError::NonPositive {
            field: field.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// `value + 1`, or `OutOfRange` at the top of the id space.
pub fn successor(value: i64, field: &str) -> CareResult<i64> {
    value.checked_add(1).ok_or_else(|| CareError::OutOfRange {
        field: field.to_string(),
    })
}

/// A float that holds an exact integer within `i64` range.
pub fn whole_number(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

/// Reads an integer the way a browser form would submit it: surrounding
/// whitespace is ignored, `"1.0"` counts as 1, and anything else yields `None`.
pub fn lenient_integer(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    trimmed
        .parse()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_number))
}
