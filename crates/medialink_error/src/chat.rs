//! Chat client collaborator error types.

/// Chat platform error wrapping client failures with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Chat Error: {} at line {} in {}", message, line, file)]
pub struct ChatError {
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ChatError {
    /// Create a new ChatError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use medialink_error::ChatError;
    ///
    /// let err = ChatError::new("Flood wait");
    /// assert!(err.message.contains("Flood wait"));
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
