//! Memoizing cache implementation.

use derive_getters::Getters;
use medialink_error::{CacheError, MedialinkResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Cache entry with value and expiration.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    value: JsonValue,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    /// Check if this entry is expired.
    ///
    /// An entry of age exactly `ttl` counts as expired.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    /// Get remaining time until expiration.
    pub fn time_remaining(&self) -> Option<Duration> {
        self.ttl.checked_sub(self.created_at.elapsed())
    }
}

/// Cache key derived from a computation identity and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    identity: String,
    args_hash: u64,
}

impl CacheKey {
    fn new(identity: &str, args: &HashMap<String, JsonValue>) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();

        // Create stable hash of args
        let mut sorted_keys: Vec<_> = args.keys().collect();
        sorted_keys.sort();

        for key in sorted_keys {
            key.hash(&mut hasher);
            // Hash JSON value as string for stability
            if let Ok(s) = serde_json::to_string(&args[key]) {
                s.hash(&mut hasher);
            }
        }

        Self {
            identity: identity.to_string(),
            args_hash: hasher.finish(),
        }
    }
}

/// Configuration for the memoizing cache.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct MemoCacheConfig {
    /// Default TTL for cached entries (seconds)
    #[serde(default = "default_ttl")]
    #[builder(default = "default_ttl()")]
    default_ttl: u64,

    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    #[builder(default = "default_enabled()")]
    enabled: bool,
}

fn default_ttl() -> u64 {
    3600 // 1 hour
}

fn default_enabled() -> bool {
    true
}

impl Default for MemoCacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            enabled: default_enabled(),
        }
    }
}

/// Memoizing cache for derived results.
///
/// Stores results with TTL-based expiration. Cache keys are derived from a
/// computation identity plus a stable hash of its arguments, so two calls
/// with equal identity and equal arguments map to the same key.
///
/// The map lives behind a `Mutex` so one `MemoCache` handle can be shared
/// across concurrent operations; the lock is never held across an await, so
/// concurrent `get_or_compute` calls on the same key may each run the
/// computation and overwrite last-write-wins. There is no size bound and no
/// automatic sweep.
///
/// # Example
///
/// ```
/// use medialink_cache::{MemoCache, MemoCacheConfig};
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let cache = MemoCache::new(MemoCacheConfig::default());
///
/// let mut args = HashMap::new();
/// args.insert("message_id".to_string(), json!(42));
///
/// cache.insert("generate_media_links", &args, json!("https://..."), None);
/// assert!(cache.get("generate_media_links", &args).is_some());
/// ```
pub struct MemoCache {
    config: MemoCacheConfig,
    entries: Mutex<HashMap<CacheKey, CacheEntry>>,
}

impl MemoCache {
    /// Create a new memoizing cache with configuration.
    pub fn new(config: MemoCacheConfig) -> Self {
        tracing::debug!(
            default_ttl = config.default_ttl,
            enabled = config.enabled,
            "Creating new MemoCache"
        );
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<CacheKey, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a result into the cache.
    ///
    /// # Arguments
    ///
    /// * `identity` - Computation identity (e.g., "generate_media_links")
    /// * `args` - Computation arguments
    /// * `value` - Result value to cache
    /// * `ttl_seconds` - TTL in seconds (uses default if None)
    pub fn insert(
        &self,
        identity: &str,
        args: &HashMap<String, JsonValue>,
        value: JsonValue,
        ttl_seconds: Option<u64>,
    ) {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping insert");
            return;
        }

        let key = CacheKey::new(identity, args);
        let ttl = Duration::from_secs(ttl_seconds.unwrap_or(self.config.default_ttl));

        let entry = CacheEntry {
            value,
            created_at: Instant::now(),
            ttl,
        };

        tracing::debug!(identity, ttl = ?ttl, "Inserted entry into cache");

        self.entries().insert(key, entry);
    }

    /// Get a cached result.
    ///
    /// Returns None if:
    /// - Entry doesn't exist
    /// - Entry is expired (the stale entry is removed)
    /// - Cache is disabled
    pub fn get(&self, identity: &str, args: &HashMap<String, JsonValue>) -> Option<JsonValue> {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, returning None");
            return None;
        }

        let key = CacheKey::new(identity, args);
        let mut entries = self.entries();

        let entry = entries.get(&key)?;
        if entry.is_expired() {
            tracing::debug!(identity, "Cache entry expired, removing");
            entries.remove(&key);
            return None;
        }

        tracing::debug!(
            identity,
            time_remaining = ?entry.time_remaining(),
            "Cache hit"
        );

        Some(entry.value.clone())
    }

    /// Look up a cached result, computing and storing it on a miss.
    ///
    /// On a fresh hit the stored value is returned without invoking
    /// `compute`. Otherwise `compute` runs (it may suspend on I/O), its
    /// result is stored under the key with the default TTL, overwriting any
    /// stale entry, and returned. A failed computation propagates to the
    /// caller and writes no entry, so the next call computes again.
    ///
    /// # Errors
    ///
    /// Propagates `compute` failures; also fails if the result cannot be
    /// converted to or from its stored JSON form.
    pub async fn get_or_compute<T, F, Fut>(
        &self,
        identity: &str,
        args: &HashMap<String, JsonValue>,
        compute: F,
    ) -> MedialinkResult<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = MedialinkResult<T>>,
    {
        if let Some(value) = self.get(identity, args) {
            return serde_json::from_value(value).map_err(|e| {
                CacheError::new(format!("Failed to decode cached value for {identity}: {e}")).into()
            });
        }

        let result = compute().await?;

        if self.config.enabled {
            let value = serde_json::to_value(&result).map_err(|e| {
                CacheError::new(format!("Failed to encode result for {identity}: {e}"))
            })?;
            self.insert(identity, args, value, None);
        }

        Ok(result)
    }

    /// Remove expired entries from the cache.
    ///
    /// Caller-triggered; removes every entry whose age has reached its TTL
    /// and returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        let mut entries = self.entries();
        let before = entries.len();

        entries.retain(|_, entry| !entry.is_expired());

        let removed = before - entries.len();
        if removed > 0 {
            tracing::info!(
                removed,
                remaining = entries.len(),
                "Swept expired cache entries"
            );
        }
        removed
    }

    /// Clear all cache entries.
    pub fn clear(&self) {
        let mut entries = self.entries();
        let count = entries.len();
        entries.clear();
        tracing::info!(cleared = count, "Cleared cache");
    }

    /// Get number of cached entries.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new(MemoCacheConfig::default())
    }
}
