//! Owner and bin-channel notification.

use crate::ChatClient;
use std::sync::Arc;
use tracing::error;

/// Best-effort notification channel to the bot owner(s) and bin channel.
///
/// Notification failures never propagate: the owner path logs and moves on,
/// and the bin-channel path falls back to the owner path. Notifications are
/// an observability aid, not part of any operation's outcome.
#[derive(Clone)]
pub struct Notifier {
    chat: Arc<dyn ChatClient>,
    owner_ids: Vec<i64>,
    bin_channel: Option<i64>,
}

impl Notifier {
    /// Create a notifier over a chat client.
    pub fn new(chat: Arc<dyn ChatClient>, owner_ids: Vec<i64>, bin_channel: Option<i64>) -> Self {
        Self {
            chat,
            owner_ids,
            bin_channel,
        }
    }

    /// Send a notification to every configured owner.
    pub async fn notify_owner(&self, text: &str) {
        for owner_id in &self.owner_ids {
            if let Err(e) = self.chat.send_message(*owner_id, text).await {
                error!(owner_id, %e, "Failed to notify owner");
            }
        }
    }

    /// Send a notification to the bin channel, falling back to the owners.
    pub async fn notify_channel(&self, text: &str) {
        let Some(channel_id) = self.bin_channel else {
            return;
        };
        if let Err(e) = self.chat.send_message(channel_id, text).await {
            error!(channel_id, %e, "Failed to notify bin channel");
            self.notify_owner(&format!("Error notifying bin channel: {e}"))
                .await;
        }
    }

    /// Flag a critical error to the owners.
    pub async fn critical(&self, text: &str) {
        self.notify_owner(&format!("⚠️ Critical Error: {text}")).await;
    }
}
