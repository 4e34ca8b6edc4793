//! Medialink - file-sharing bot utilities.
//!
//! Auxiliary utilities for a file-to-link bot on a chat platform: link
//! generation, message formatting, TTL memoization, and notification
//! helpers. All platform interaction goes through narrow collaborator
//! traits; this workspace ships no network client of its own.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use medialink::{BotConfig, BotOps};
//! use std::sync::Arc;
//!
//! # async fn run(chat: Arc<dyn medialink::ChatClient>,
//! #              store: Arc<dyn medialink::UserStore>,
//! #              metadata: Arc<dyn medialink::MediaMetadata>) {
//! let config = BotConfig::from_file("medialink.toml").unwrap();
//! let ops = BotOps::new(chat, store, metadata, &config);
//!
//! let links = ops.links().generate(42).await.unwrap();
//! println!("download: {}", links.download_url());
//! # }
//! ```
//!
//! # Architecture
//!
//! The workspace is organized as focused crates:
//!
//! - `medialink_core` - data types, constraint table, unit formatting
//! - `medialink_error` - error types
//! - `medialink_cache` - TTL memoizing cache
//! - `medialink_format` - message and button formatting
//! - `medialink_bot` - collaborator traits and the operations layer
//!
//! This crate (`medialink`) re-exports everything for convenience.

#![forbid(unsafe_code)]

pub use medialink_bot::{
    BotConfig, BotOps, ChatClient, ChatInfo, ChatKind, ChatMessage, FailureAction, FailurePolicy,
    GENERATE_LINKS_IDENTITY, LinkGenerator, MediaMetadata, MemberStatus, Notifier, Requester,
    UserStore, derive_link_pair,
};
pub use medialink_cache::{CacheEntry, MemoCache, MemoCacheConfig, MemoCacheConfigBuilder};
pub use medialink_core::{
    BannedChannels, BroadcastStats, LinkPair, MAX_BROADCAST_USERS, MAX_FILES_PER_COMMAND,
    MAX_FILE_SIZE, MAX_MESSAGE_LENGTH, MIN_FILES_PER_COMMAND, MediaReference, RoleTable, UserRole,
    human_bytes, init_telemetry, readable_duration, validate_file_count, validate_message_length,
};
pub use medialink_error::{
    CacheError, ChatError, ConfigError, MediaError, MedialinkError, MedialinkErrorKind,
    MedialinkResult, StorageError, ValidationError, ValidationErrorKind,
};
pub use medialink_format::{
    Button, ButtonRows, about_message, batch_links_message, batch_summary_message,
    broadcast_complete_message, dc_info_message, error_message, file_count_range_message,
    help_message, link_buttons, links_message, new_user_alert, profile_button, welcome_message,
};
