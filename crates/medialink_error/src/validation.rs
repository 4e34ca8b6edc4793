//! Input validation error types.
//!
//! Validation failures are the one error family surfaced directly to the
//! requester as a corrective message, so the kind enum keeps the offending
//! values around for display.

use derive_getters::Getters;

/// Validation error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// Requested file count is outside the accepted range.
    #[display("File count {got} outside accepted range {min}..={max}")]
    FileCountOutOfRange {
        /// Requested count
        got: i64,
        /// Lower bound (inclusive)
        min: usize,
        /// Upper bound (inclusive)
        max: usize,
    },
}

/// Validation error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    kind: ValidationErrorKind,
    line: u32,
    file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError with automatic location tracking.
    ///
    /// # Examples
    ///
    /// ```
    /// use medialink_error::{ValidationError, ValidationErrorKind};
    ///
    /// let err = ValidationError::new(ValidationErrorKind::FileCountOutOfRange {
    ///     got: 26,
    ///     min: 1,
    ///     max: 25,
    /// });
    /// assert!(format!("{}", err).contains("File count 26"));
    /// ```
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
