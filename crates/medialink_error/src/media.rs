//! Media metadata collaborator error types.

/// Media error for inaccessible or malformed stored media.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", message, line, file)]
pub struct MediaError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl MediaError {
    /// Create a new MediaError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use medialink_error::MediaError;
    ///
    /// let err = MediaError::new("file reference expired");
    /// assert!(err.message.contains("expired"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
