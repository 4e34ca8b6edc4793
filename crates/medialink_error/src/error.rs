//! Top-level error wrapper types.

use crate::{CacheError, ChatError, ConfigError, MediaError, StorageError, ValidationError};

/// Foundation error enum for the medialink workspace.
///
/// # Examples
///
/// ```
/// use medialink_error::{MedialinkError, ChatError};
///
/// let chat_err = ChatError::new("Connection failed");
/// let err: MedialinkError = chat_err.into();
/// assert!(format!("{}", err).contains("Chat Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MedialinkErrorKind {
    /// Chat client collaborator failure
    #[from(ChatError)]
    Chat(ChatError),
    /// Persistent store collaborator failure
    #[from(StorageError)]
    Storage(StorageError),
    /// Media metadata collaborator failure
    #[from(MediaError)]
    Media(MediaError),
    /// Memoizing cache failure
    #[from(CacheError)]
    Cache(CacheError),
    /// Input outside accepted bounds
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Medialink error with kind discrimination.
///
/// # Examples
///
/// ```
/// use medialink_error::{MedialinkResult, ConfigError};
///
/// fn might_fail() -> MedialinkResult<()> {
///     Err(ConfigError::new("Missing base_url"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Medialink Error: {}", _0)]
pub struct MedialinkError(Box<MedialinkErrorKind>);

impl MedialinkError {
    /// Create a new error from a kind.
    pub fn new(kind: MedialinkErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MedialinkErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MedialinkErrorKind
impl<T> From<T> for MedialinkError
where
    T: Into<MedialinkErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for medialink operations.
///
/// # Examples
///
/// ```
/// use medialink_error::{MedialinkResult, MediaError};
///
/// fn fetch_name() -> MedialinkResult<String> {
///     Err(MediaError::new("media message not found"))?
/// }
/// ```
pub type MedialinkResult<T> = std::result::Result<T, MedialinkError>;
