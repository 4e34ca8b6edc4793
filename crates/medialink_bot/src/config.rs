//! Bot configuration loading.

use medialink_cache::MemoCacheConfig;
use medialink_error::{ConfigError, MedialinkResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the medialink bot utilities.
///
/// Read once at startup; not re-validated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Base URL links are derived from
    pub base_url: String,
    /// Owner user ids receiving notifications
    pub owner_ids: Vec<i64>,
    /// Bin channel for media copies and channel notices
    #[serde(default)]
    pub bin_channel: Option<i64>,
    /// Channels the bot refuses to serve
    #[serde(default)]
    pub banned_channels: Vec<i64>,
    /// Memoizing cache settings
    #[serde(default)]
    pub cache: MemoCacheConfig,
}

impl BotConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> MedialinkResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {e}")).into())
    }
}
