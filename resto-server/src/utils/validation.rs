//! Input validation helpers
//!
//! Centralized text length constants and validation functions. Validation
//! failures block the mutation entirely; no partially-applied update exists.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: menu item, category, table number, staff, customer, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, addresses
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, contact, date/time labels, color codes
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that a price is finite and non-negative.
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a count (guests, capacity, quantity) is positive.
pub fn validate_positive(value: i32, field: &str) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::validation(format!(
            "{field} must be positive, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_required_text_is_rejected() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Nasi Goreng", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn overlong_text_is_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
        assert!(validate_optional_text(&Some(long), "notes", MAX_NOTE_LEN).is_err());
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
    }

    #[test]
    fn price_must_be_finite_and_non_negative() {
        assert!(validate_price(45000.0, "price").is_ok());
        assert!(validate_price(-1.0, "price").is_err());
        assert!(validate_price(f64::NAN, "price").is_err());
        assert!(validate_price(f64::INFINITY, "price").is_err());
    }
}
