//! Collaborator trait definitions.
//!
//! The operations layer reaches the chat platform, the persistent store,
//! and the media metadata source exclusively through these seams. Each is
//! object-safe so implementations can be injected as `Arc<dyn Trait>`.

use async_trait::async_trait;
use derive_getters::Getters;
use medialink_core::MediaReference;
use medialink_error::MedialinkResult;
use medialink_format::ButtonRows;

/// What kind of conversation a chat is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ChatKind {
    /// One-on-one conversation with the bot
    Private,
    /// Group chat
    Group,
    /// Broadcast channel
    Channel,
}

/// Membership status of a user within a chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MemberStatus {
    /// Chat creator
    Creator,
    /// Administrator
    Administrator,
    /// Ordinary member
    Member,
    /// Member with restrictions
    Restricted,
    /// Left the chat
    Left,
    /// Banned from the chat
    Banned,
}

/// Chat identity and kind as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct ChatInfo {
    /// Platform chat id
    id: i64,
    /// Conversation kind
    kind: ChatKind,
}

/// The user (or chat) behind a request.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct Requester {
    /// Platform user id
    id: i64,
    /// Display name
    #[new(into)]
    first_name: String,
    /// Data center id, when the platform reports one
    dc_id: Option<i32>,
}

/// A platform message as seen by the operations layer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct ChatMessage {
    /// Platform message id
    id: i64,
    /// Chat the message belongs to
    chat_id: i64,
    /// Whether the message carries media
    has_media: bool,
    /// Sender, when known
    sender: Option<Requester>,
}

/// Chat platform client collaborator.
///
/// Mirrors the handful of platform calls the operations layer needs. Every
/// method may fail with a `ChatError`; callers decide whether a failure
/// aborts the operation or is notified and swallowed.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send a plain text message to a chat. Returns the new message id.
    async fn send_message(&self, chat_id: i64, text: &str) -> MedialinkResult<i64>;

    /// Reply to a message, optionally attaching inline buttons.
    /// Returns the new message id.
    async fn reply(
        &self,
        chat_id: i64,
        reply_to: i64,
        text: &str,
        buttons: Option<&ButtonRows>,
    ) -> MedialinkResult<i64>;

    /// Fetch chat identity and kind.
    async fn get_chat(&self, chat_id: i64) -> MedialinkResult<ChatInfo>;

    /// Fetch a user's membership status within a chat.
    async fn get_chat_member(&self, chat_id: i64, user_id: i64) -> MedialinkResult<MemberStatus>;

    /// Leave a chat.
    async fn leave_chat(&self, chat_id: i64) -> MedialinkResult<()>;

    /// Copy a media message into another chat. Returns the copy's id.
    async fn copy_media(
        &self,
        chat_id: i64,
        message_id: i64,
        dest_chat_id: i64,
    ) -> MedialinkResult<i64>;

    /// Fetch messages by id. Ids the platform cannot resolve come back as
    /// `None` in the corresponding position.
    async fn get_messages(
        &self,
        chat_id: i64,
        message_ids: &[i64],
    ) -> MedialinkResult<Vec<Option<ChatMessage>>>;

    /// Delete a message.
    async fn delete_message(&self, chat_id: i64, message_id: i64) -> MedialinkResult<()>;

    /// The bot's own user id.
    fn self_id(&self) -> i64;
}

/// Persistent user/broadcast store collaborator.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether a user id has been seen before.
    async fn user_exists(&self, user_id: i64) -> MedialinkResult<bool>;

    /// Persist a new user id.
    async fn add_user(&self, user_id: i64) -> MedialinkResult<()>;

    /// Persist a structured broadcast/request log entry.
    async fn log_broadcast(
        &self,
        broadcast_id: &str,
        message: &str,
        status: &str,
    ) -> MedialinkResult<()>;
}

/// Media metadata collaborator.
///
/// Resolves the name, size, and content hash behind a stored media message.
/// May fail if the underlying item is inaccessible; the failure propagates
/// and no partial reference is ever produced.
#[async_trait]
pub trait MediaMetadata: Send + Sync {
    /// Resolve metadata for the media carried by a platform message.
    async fn media_info(&self, message_id: i64) -> MedialinkResult<MediaReference>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_member_status_parses_platform_strings() {
        // Platform APIs report membership status as lowercase strings;
        // client implementations map them through FromStr.
        assert_eq!(
            MemberStatus::from_str("administrator").unwrap(),
            MemberStatus::Administrator
        );
        assert_eq!(
            MemberStatus::from_str("creator").unwrap(),
            MemberStatus::Creator
        );
        assert_eq!(
            MemberStatus::from_str("banned").unwrap(),
            MemberStatus::Banned
        );
        assert!(MemberStatus::from_str("owner").is_err());
    }

    #[test]
    fn test_chat_kind_display() {
        assert_eq!(ChatKind::Private.to_string(), "private");
        assert_eq!(ChatKind::Channel.to_string(), "channel");
    }
}
