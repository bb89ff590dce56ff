//! Core error types for the fund construction engine.
//!
//! The engine is pure arithmetic over user-supplied numbers, so the taxonomy
//! is narrow: input validation failures (including per-cell failures from
//! editable grids) and calculation failures. Economically degenerate inputs
//! (fee + expense above 100%, over-allocated capital) are *not* errors; the
//! engine computes and returns them so a hosting UI can flag the scenario.

use std::num::ParseFloatError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the fund construction engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for user input and editable-grid cells.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Value for '{field}' is out of range: {value}")]
    OutOfRange { field: String, value: String },

    /// A single editable-table cell failed to parse. Carries enough position
    /// information for the hosting UI to highlight the offending cell; other
    /// rows of the grid are unaffected.
    #[error("Invalid cell at row '{row}', column '{column}': {message}")]
    Cell {
        row: String,
        column: String,
        message: String,
    },
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
