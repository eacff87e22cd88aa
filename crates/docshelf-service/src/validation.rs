//! Conversion of `validator` failures into [`AppError`]s.

use validator::{Validate, ValidationErrors};

use docshelf_core::error::AppError;

/// Run `Validate` on a request and flatten failures into one Validation error.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate().map_err(validation_error)
}

/// Flatten field errors into `"field: message; field: message"`, sorted by field.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid ({})", e.code),
            })
        })
        .collect();
    messages.sort();
    AppError::validation(messages.join("; "))
}
