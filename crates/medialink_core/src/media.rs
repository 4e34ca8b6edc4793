//! Media reference types for stored platform files.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Reference to a media item stored on the chat platform.
///
/// The `message_id` is the opaque platform identifier; name, size, and
/// content hash are resolved by the media metadata collaborator and are
/// read-only here. File names arrive as raw bytes from the platform and are
/// decoded lazily with replacement on invalid UTF-8.
///
/// # Examples
///
/// ```
/// use medialink_core::MediaReference;
///
/// let media = MediaReference::new(42, b"My File.mp4".to_vec(), 1048576, "abc123".into());
/// assert_eq!(media.display_name(), "My File.mp4");
/// assert_eq!(*media.size_bytes(), 1048576);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MediaReference {
    /// Platform message id carrying the media
    message_id: i64,
    /// Raw file name bytes as reported by the platform
    file_name: Vec<u8>,
    /// File size in bytes
    size_bytes: u64,
    /// Content hash used to authenticate link requests
    content_hash: String,
}

impl MediaReference {
    /// File name decoded as UTF-8 with replacement on invalid sequences.
    pub fn display_name(&self) -> String {
        String::from_utf8_lossy(&self.file_name).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_valid_utf8() {
        let media = MediaReference::new(1, b"video.mkv".to_vec(), 10, "h".into());
        assert_eq!(media.display_name(), "video.mkv");
    }

    #[test]
    fn test_display_name_replaces_invalid_bytes() {
        let media = MediaReference::new(1, vec![0x66, 0xFF, 0x6F], 10, "h".into());
        assert_eq!(media.display_name(), "f\u{FFFD}o");
    }
}
