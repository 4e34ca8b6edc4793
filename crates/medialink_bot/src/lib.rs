//! Operations layer for the medialink file-sharing bot.
//!
//! This crate orchestrates the medialink workspace: admin-privilege checks,
//! new-user logging, batch link generation, broadcast completion reporting,
//! and request logging. All chat-platform interaction and persistence go
//! through narrow collaborator traits; nothing here talks to the network
//! directly.
//!
//! # Architecture
//!
//! - `traits` - collaborator seams (chat client, user store, media metadata)
//! - `links` - cache-wrapped link derivation
//! - `notify` - owner and bin-channel notification
//! - `ops` - stateless orchestration operations
//! - `policy` - per-error-kind notify-and-continue vs notify-and-abort
//! - `config` - TOML configuration loading

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod links;
mod notify;
mod ops;
mod policy;
mod traits;

pub use config::BotConfig;
pub use links::{GENERATE_LINKS_IDENTITY, LinkGenerator, derive_link_pair};
pub use notify::Notifier;
pub use ops::BotOps;
pub use policy::{FailureAction, FailurePolicy};
pub use traits::{
    ChatClient, ChatInfo, ChatKind, ChatMessage, MediaMetadata, MemberStatus, Requester, UserStore,
};
