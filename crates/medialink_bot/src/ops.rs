//! Stateless orchestration operations.
//!
//! Each operation is a thin composition of the constraint table, formatter,
//! link generator, and the external collaborators. No state machine: every
//! call is an independent request/response.

use crate::{
    BotConfig, ChatClient, ChatKind, ChatMessage, FailureAction, FailurePolicy, LinkGenerator,
    MediaMetadata, MemberStatus, Notifier, Requester, UserStore,
};
use medialink_cache::MemoCache;
use medialink_core::{
    BannedChannels, BroadcastStats, LinkPair, MAX_FILES_PER_COMMAND, MIN_FILES_PER_COMMAND,
    validate_file_count,
};
use medialink_error::{
    ConfigError, MedialinkErrorKind, MedialinkResult, ValidationError, ValidationErrorKind,
};
use medialink_format::{
    batch_links_message, batch_summary_message, broadcast_complete_message, error_message,
    file_count_range_message, link_buttons, links_message, new_user_alert,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Orchestration operations for the file-sharing bot.
///
/// Owns the memoizing cache and the link generator; talks to the platform
/// and the store through injected collaborators. Failure handling follows
/// the [`FailurePolicy`]: validation failures surface a corrective message,
/// storage failures are owner-notified and swallowed, everything else
/// aborts the enclosing operation with an owner notice.
pub struct BotOps {
    chat: Arc<dyn ChatClient>,
    store: Arc<dyn UserStore>,
    notifier: Notifier,
    links: LinkGenerator,
    cache: Arc<MemoCache>,
    policy: FailurePolicy,
    banned: BannedChannels,
    bin_channel: Option<i64>,
}

impl BotOps {
    /// Wire up the operations layer from configuration and collaborators.
    pub fn new(
        chat: Arc<dyn ChatClient>,
        store: Arc<dyn UserStore>,
        metadata: Arc<dyn MediaMetadata>,
        config: &BotConfig,
    ) -> Self {
        let cache = Arc::new(MemoCache::new(config.cache.clone()));
        let notifier = Notifier::new(chat.clone(), config.owner_ids.clone(), config.bin_channel);
        let links = LinkGenerator::new(config.base_url.clone(), metadata, cache.clone());
        Self {
            chat,
            store,
            notifier,
            links,
            cache,
            policy: FailurePolicy,
            banned: BannedChannels::new(config.banned_channels.iter().copied()),
            bin_channel: config.bin_channel,
        }
    }

    /// The shared memoizing cache, for caller-triggered sweeps.
    pub fn cache(&self) -> &Arc<MemoCache> {
        &self.cache
    }

    /// The notifier, for callers that need to raise their own alerts.
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// The cache-wrapped link generator.
    pub fn links(&self) -> &LinkGenerator {
        &self.links
    }

    /// Check whether the bot is admin-authorized in a chat.
    ///
    /// Private conversations are always authorized without a membership
    /// lookup. Otherwise the bot's own membership must be administrator or
    /// creator. Any lookup failure notifies the owners and fails closed.
    #[instrument(skip(self))]
    pub async fn check_admin_privileges(&self, chat_id: i64) -> bool {
        match self.admin_status(chat_id).await {
            Ok(authorized) => authorized,
            Err(e) => {
                self.notifier
                    .notify_owner(&format!(
                        "Error checking admin privileges in chat {chat_id}: {e}"
                    ))
                    .await;
                false
            }
        }
    }

    async fn admin_status(&self, chat_id: i64) -> MedialinkResult<bool> {
        let chat = self.chat.get_chat(chat_id).await?;
        if *chat.kind() == ChatKind::Private {
            return Ok(true);
        }
        let status = self.chat.get_chat_member(chat_id, self.chat.self_id()).await?;
        Ok(matches!(
            status,
            MemberStatus::Administrator | MemberStatus::Creator
        ))
    }

    /// Persist a newly seen user and alert the owners once.
    ///
    /// Existing users produce no alert. Failures during either step are
    /// owner-notified and swallowed.
    #[instrument(skip(self, first_name))]
    pub async fn log_new_user(&self, user_id: i64, first_name: &str) {
        if let Err(e) = self.record_new_user(user_id, first_name).await {
            self.notifier
                .notify_owner(&format!("Error logging new user {user_id}: {e}"))
                .await;
        }
    }

    async fn record_new_user(&self, user_id: i64, first_name: &str) -> MedialinkResult<()> {
        if self.store.user_exists(user_id).await? {
            return Ok(());
        }
        self.store.add_user(user_id).await?;
        info!(user_id, "Registered new user");
        self.notifier
            .notify_owner(&new_user_alert(first_name, user_id))
            .await;
        Ok(())
    }

    /// Generate download links for a contiguous run of media messages.
    ///
    /// Validates `num_files` against the constraint table first; out of
    /// range replies with the accepted bounds and performs no fetches. Any
    /// failure mid-batch aborts remaining processing, notifies the owners,
    /// and replies with a generic failure message.
    #[instrument(skip(self, command, reply_to), fields(chat_id = command.chat_id()))]
    pub async fn process_batch(
        &self,
        command: &ChatMessage,
        reply_to: &ChatMessage,
        num_files: i64,
    ) {
        if let Err(e) = self.run_batch(command, reply_to, num_files).await {
            // Validation failures get the corrective bounds; everything
            // else is owner-notified and answered generically.
            let reply = match e.kind() {
                MedialinkErrorKind::Validation(_) => {
                    file_count_range_message(MIN_FILES_PER_COMMAND, MAX_FILES_PER_COMMAND)
                }
                _ => {
                    self.notifier
                        .notify_owner(&format!("Error in batch message processing: {e}"))
                        .await;
                    error_message("An error occurred while processing multiple messages.")
                }
            };
            if self.policy.action_for(e.kind()) == FailureAction::Abort {
                if let Err(e) = self
                    .chat
                    .reply(*command.chat_id(), *command.id(), &reply, None)
                    .await
                {
                    warn!(%e, "Failed to send batch failure reply");
                }
            }
        }
    }

    async fn run_batch(
        &self,
        command: &ChatMessage,
        reply_to: &ChatMessage,
        num_files: i64,
    ) -> MedialinkResult<()> {
        if !validate_file_count(num_files) {
            return Err(ValidationError::new(ValidationErrorKind::FileCountOutOfRange {
                got: num_files,
                min: MIN_FILES_PER_COMMAND,
                max: MAX_FILES_PER_COMMAND,
            })
            .into());
        }
        let num_files = num_files as usize;

        let chat_id = *command.chat_id();
        let start = *reply_to.id();
        let ids: Vec<i64> = (start..start + num_files as i64).collect();

        let messages = self.chat.get_messages(chat_id, &ids).await?;
        let mut download_links = Vec::new();
        let mut processed = 0usize;

        for message in &messages {
            match message {
                Some(msg) if *msg.has_media() => {
                    let pair = self.links.generate(*msg.id()).await?;
                    download_links.push(pair.download_url().clone());
                    processed += 1;
                }
                other => {
                    let id = other
                        .as_ref()
                        .map_or_else(|| "unknown".to_string(), |m| m.id().to_string());
                    self.notifier
                        .notify_owner(&format!("Skipped message {id} in batch processing."))
                        .await;
                }
            }
        }

        if !download_links.is_empty() {
            let text = batch_links_message(processed, &download_links.join("\n"));
            self.chat
                .reply(chat_id, *command.id(), &text, None)
                .await?;
        }
        self.chat
            .reply(chat_id, *command.id(), &batch_summary_message(processed), None)
            .await?;

        info!(processed, requested = num_files, "Batch link generation finished");
        Ok(())
    }

    /// Report broadcast completion: delete the progress message and reply
    /// with the formatted summary.
    ///
    /// Never cached. The summary text is pure formatting; the delete and
    /// send must run on every call.
    #[instrument(skip(self, command, stats), fields(chat_id = command.chat_id()))]
    pub async fn broadcast_complete(
        &self,
        command: &ChatMessage,
        status_message_id: i64,
        stats: &BroadcastStats,
    ) -> MedialinkResult<()> {
        let text = broadcast_complete_message(stats);
        self.chat
            .delete_message(*command.chat_id(), status_message_id)
            .await?;
        self.chat
            .reply(*command.chat_id(), *command.id(), &text, None)
            .await?;
        Ok(())
    }

    /// Reply to the requester with the link pair and its button row.
    pub async fn send_links_to_user(
        &self,
        command: &ChatMessage,
        links: &LinkPair,
    ) -> MedialinkResult<()> {
        let text = links_message(
            links.display_name(),
            links.display_size(),
            links.stream_url(),
            links.download_url(),
        );
        let buttons = link_buttons(links.stream_url(), links.download_url());
        self.chat
            .reply(*command.chat_id(), *command.id(), &text, Some(&buttons))
            .await?;
        Ok(())
    }

    /// Persist a request log entry after links were delivered.
    ///
    /// Ordering contract: delivery happened first; a logging failure is
    /// owner-notified and swallowed, never rolling back delivery.
    #[instrument(skip(self, requester, links))]
    pub async fn log_request(&self, log_msg_id: i64, requester: &Requester, links: &LinkPair) {
        let entry = format!(
            "Requested by: {} (ID: {})\nDownload: {}\nWatch: {}",
            requester.first_name(),
            requester.id(),
            links.download_url(),
            links.stream_url(),
        );
        if let Err(e) = self
            .store
            .log_broadcast(&log_msg_id.to_string(), &entry, "Completed")
            .await
        {
            // Deliver-first ordering: logging failures never roll back
            // delivery, regardless of kind.
            self.notifier
                .notify_owner(&format!("Error logging request: {e}"))
                .await;
        }
    }

    /// Leave a chat if it is on the banned list. Returns whether the bot
    /// left.
    #[instrument(skip(self))]
    pub async fn leave_banned_channel(&self, chat_id: i64) -> bool {
        if !self.banned.contains(chat_id) {
            return false;
        }
        match self.chat.leave_chat(chat_id).await {
            Ok(()) => {
                info!(chat_id, "Left banned channel");
                true
            }
            Err(e) => {
                self.notifier
                    .critical(&format!("Failed to leave banned channel {chat_id}: {e}"))
                    .await;
                false
            }
        }
    }

    /// Copy a media message into the bin channel. Returns the copy's id.
    ///
    /// Failures notify the owners and propagate; callers depend on the
    /// copied message id.
    #[instrument(skip(self))]
    pub async fn forward_media(&self, chat_id: i64, message_id: i64) -> MedialinkResult<i64> {
        let dest = self
            .bin_channel
            .ok_or_else(|| ConfigError::new("No bin channel configured"))?;
        match self.chat.copy_media(chat_id, message_id, dest).await {
            Ok(copy_id) => Ok(copy_id),
            Err(e) => {
                self.notifier
                    .critical(&format!("Error forwarding media: {e}"))
                    .await;
                Err(e)
            }
        }
    }
}
