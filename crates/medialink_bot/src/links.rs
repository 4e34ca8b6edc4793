//! Cache-wrapped derivation of stream and download links.

use crate::MediaMetadata;
use medialink_cache::MemoCache;
use medialink_core::{LinkPair, MediaReference, human_bytes};
use medialink_error::MedialinkResult;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

/// Cache identity for link derivation.
pub const GENERATE_LINKS_IDENTITY: &str = "generate_media_links";

/// Derive the stream/download link pair for a media reference.
///
/// Deterministic on `(message_id, file_name, content_hash)`. The display
/// name is the lossy UTF-8 decode of the platform file name; the path
/// segment replaces its spaces with underscores.
///
/// # Examples
///
/// ```
/// use medialink_bot::derive_link_pair;
/// use medialink_core::MediaReference;
///
/// let media = MediaReference::new(42, b"My File.mp4".to_vec(), 1048576, "abc123".into());
/// let links = derive_link_pair("https://example.com", &media);
/// assert_eq!(
///     links.stream_url(),
///     "https://example.com/watch/42/My_File.mp4?hash=abc123"
/// );
/// assert_eq!(
///     links.download_url(),
///     "https://example.com/42/My_File.mp4?hash=abc123"
/// );
/// ```
pub fn derive_link_pair(base_url: &str, media: &MediaReference) -> LinkPair {
    let base = base_url.trim_end_matches('/');
    let id = media.message_id();
    let display_name = media.display_name();
    let segment = display_name.replace(' ', "_");
    let hash = media.content_hash();

    LinkPair::new(
        format!("{base}/watch/{id}/{segment}?hash={hash}"),
        format!("{base}/{id}/{segment}?hash={hash}"),
        display_name,
        human_bytes(*media.size_bytes()),
    )
}

/// Link generator wrapping metadata resolution with the memoizing cache.
///
/// Lookups are keyed on the media message id; within the cache TTL a second
/// request for the same message serves the stored pair without touching the
/// metadata collaborator. Metadata failures propagate and leave no entry.
pub struct LinkGenerator {
    base_url: String,
    metadata: Arc<dyn MediaMetadata>,
    cache: Arc<MemoCache>,
}

impl LinkGenerator {
    /// Create a link generator. A trailing slash on `base_url` is trimmed.
    pub fn new(
        base_url: impl Into<String>,
        metadata: Arc<dyn MediaMetadata>,
        cache: Arc<MemoCache>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            metadata,
            cache,
        }
    }

    /// Derive (or serve from cache) the link pair for a media message.
    #[instrument(skip(self))]
    pub async fn generate(&self, message_id: i64) -> MedialinkResult<LinkPair> {
        let mut args = HashMap::new();
        args.insert("message_id".to_string(), json!(message_id));

        self.cache
            .get_or_compute(GENERATE_LINKS_IDENTITY, &args, || async {
                let media = self.metadata.media_info(message_id).await?;
                Ok(derive_link_pair(&self.base_url, &media))
            })
            .await
    }
}
