//! Input validation for commands entering the engine.
//!
//! The seat and party-size upper bounds are enforced here only. The registry
//! and ledger accept anything type-correct.

use crate::error::ValidationError;
use crate::time::TimeOfDay;

pub type ValidationResult<T> = Result<T, ValidationError>;

/// Trim `value` and reject it if nothing is left.
pub fn validate_name(field: &'static str, value: &str) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }
    Ok(trimmed.to_string())
}

/// Require `min <= value <= max`.
pub fn validate_range(field: &'static str, value: u32, min: u32, max: u32) -> ValidationResult<u32> {
    if value < min || value > max {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value: value.into(),
        });
    }
    Ok(value)
}

pub fn validate_time(value: &str) -> ValidationResult<TimeOfDay> {
    value.parse()
}

/// Require a non-empty `[start, end)` range.
pub fn validate_interval(start: TimeOfDay, end: TimeOfDay) -> ValidationResult<()> {
    if start >= end {
        return Err(ValidationError::EmptyInterval { start, end });
    }
    Ok(())
}
