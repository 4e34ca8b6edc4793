//! Derived link pair for a stored media item.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Stream and download URLs derived from a media reference.
///
/// Immutable once produced; recomputed or served from the memoizing cache,
/// never persisted.
///
/// # Examples
///
/// ```
/// use medialink_core::LinkPair;
///
/// let links = LinkPair::new(
///     "https://example.com/watch/42/My_File.mp4?hash=abc123".into(),
///     "https://example.com/42/My_File.mp4?hash=abc123".into(),
///     "My File.mp4".into(),
///     "1.00 MiB".into(),
/// );
/// assert!(links.stream_url().contains("/watch/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new)]
pub struct LinkPair {
    /// URL for in-browser streaming
    stream_url: String,
    /// URL for direct download
    download_url: String,
    /// Human-readable file name
    display_name: String,
    /// Human-readable file size
    display_size: String,
}
