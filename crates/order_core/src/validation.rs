//! Per-field rules for the order form.
//!
//! Every function here is pure: the same candidate always yields the same
//! result and nothing outside the arguments is read or written.

use shared::{domain::PizzaSize, error::ValidationError};

pub const FULL_NAME_MIN_CHARS: usize = 3;
pub const FULL_NAME_MAX_CHARS: usize = 20;

/// Trims the candidate and checks its length in characters against
/// [`FULL_NAME_MIN_CHARS`]..=[`FULL_NAME_MAX_CHARS`].
///
/// Empty and whitespace-only input is reported as too short; there is no
/// separate "required" error.
pub fn validate_full_name(candidate: &str) -> Result<String, ValidationError> {
    let trimmed = candidate.trim();
    let len = trimmed.chars().count();
    if len < FULL_NAME_MIN_CHARS {
        Err(ValidationError::FullNameTooShort)
    } else if len > FULL_NAME_MAX_CHARS {
        Err(ValidationError::FullNameTooLong)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Accepts exactly one of the size codes `S`, `M`, `L`. The empty
/// placeholder value of the size picker is rejected like any other code.
pub fn validate_size(code: &str) -> Result<PizzaSize, ValidationError> {
    PizzaSize::from_code(code).ok_or(ValidationError::SizeIncorrect)
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
