//! Input validation helpers
//!
//! Text length limits and the checks shared by every entity factory.

use crate::error::{AppError, AppResult};

/// Entity names: product, menu, menu group
pub const MAX_NAME_LEN: usize = 200;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::invalid_argument(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(AppError::invalid_argument(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        )));
    }
    Ok(())
}

/// Validate that a count-like value is at least `min`.
pub fn validate_min(value: i64, field: &str, min: i64) -> AppResult<()> {
    if value < min {
        return Err(AppError::invalid_argument(format!(
            "{field} must be at least {min} (got {value})"
        ))
        .with_detail(field, value));
    }
    Ok(())
}
