//! Validation Utilities

use validator::ValidationErrors;

use super::error::FieldError;

/// Flatten `validator` errors into field-addressed violations.
///
/// Every failing check on every field is kept. The result is sorted by field
/// name so responses are stable across runs.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();

    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}
