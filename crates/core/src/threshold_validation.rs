//! Shared numeric range-checking helpers.
//!
//! The `validator` derive covers declared bounds; these helpers cover what it
//! cannot express (non-finite floats) and turn its error report into a
//! single [`CoreError::Validation`] message.

use validator::ValidationErrors;

use crate::error::CoreError;

/// Validate that a float is a real number (not NaN or infinite).
pub fn validate_finite(value: f64, name: &str) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::Validation(format!(
            "{name} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

/// Validate that a value falls within `[0.0, 100.0]`.
pub fn validate_percentage(value: f64, name: &str) -> Result<(), CoreError> {
    validate_finite(value, name)?;
    if !(0.0..=100.0).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between 0 and 100, got {value}"
        )));
    }
    Ok(())
}

/// Flatten a `validator` report into one message, fields sorted by name so
/// the output is stable.
pub fn into_core_error(errors: ValidationErrors) -> CoreError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reasons: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{field}: {}", reasons.join(", "))
        })
        .collect();
    parts.sort();
    CoreError::Validation(parts.join("; "))
}
