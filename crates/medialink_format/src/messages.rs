//! Display string construction.

use medialink_core::{BroadcastStats, readable_duration};

/// Welcome message for new users.
pub fn welcome_message() -> String {
    concat!(
        "👋 **Welcome to the File to Link Bot!**\n\n",
        "I'll generate links for your files. Send any file to get started.\n\n",
        "🔹 **Commands:**\n",
        "/help - Learn how to use me\n",
        "/about - Information about me\n",
        "/ping - Check my response time\n\n",
        "Let's share files easily!"
    )
    .to_string()
}

/// Help message explaining bot usage.
pub fn help_message() -> String {
    concat!(
        "ℹ️ **How to Use:**\n\n",
        "🔹 Send files for link generation\n",
        "🔹 In groups, use `/link` command\n",
        "🔹 In channels, I auto-generate links\n\n",
        "🔸 **Commands:**\n",
        "/about - About this bot\n",
        "/ping - Test my responsiveness\n\n",
        "Need help? Contact support!"
    )
    .to_string()
}

/// About message for the bot.
pub fn about_message() -> String {
    concat!(
        "🤖 **About:**\n\n",
        "I'm here to help share files. Generate links for any type of file, ",
        "usable in private chats, groups, or channels.\n\n",
        "🔹 **Features:**\n",
        "- Direct download links\n",
        "- Streaming links\n",
        "- Support for all file types\n\n",
        "Suggestions? Feel free to share!"
    )
    .to_string()
}

/// Message sharing a generated link pair.
///
/// # Examples
///
/// ```
/// use medialink_format::links_message;
///
/// let text = links_message(
///     "My File.mp4",
///     "1.00 MiB",
///     "https://example.com/watch/42/My_File.mp4?hash=abc123",
///     "https://example.com/42/My_File.mp4?hash=abc123",
/// );
/// assert!(text.contains("My File.mp4"));
/// assert!(text.contains("/watch/42/"));
/// ```
pub fn links_message(
    media_name: &str,
    media_size: &str,
    stream_url: &str,
    download_url: &str,
) -> String {
    format!(
        "🔗 **Here are your links!**\n\n\
         📄 **File:** `{media_name}`\n\
         📂 **Size:** `{media_size}`\n\n\
         📥 **Download:**\n`{download_url}`\n\n\
         🖥️ **Watch:**\n`{stream_url}`\n\n\
         ⏰ **Note:** These links work while the bot is active."
    )
}

/// Generic error message shown to the requester.
pub fn error_message(error: &str) -> String {
    format!("❌ {error}\nPlease try again or contact support.")
}

/// Broadcast completion summary.
pub fn broadcast_complete_message(stats: &BroadcastStats) -> String {
    format!(
        "✅ **Broadcast Complete** ✅\n\n\
         ⏱️ **Time Taken:** {}\n\n\
         👥 **Total Users:** {}\n\n\
         ✅ **Successful:** {}\n\n\
         ❌ **Failed:** {}\n",
        readable_duration(*stats.elapsed()),
        stats.total(),
        stats.successes(),
        stats.failures(),
    )
}

/// Combined download links from a batch command, one per line.
pub fn batch_links_message(processed: usize, joined_links: &str) -> String {
    format!(
        "📥 **Here are your {processed} combined download links:**\n\n`{joined_links}`"
    )
}

/// Summary reply after a batch command finishes.
pub fn batch_summary_message(processed: usize) -> String {
    format!("✅ **Processed {processed} files starting from the replied message.**")
}

/// Corrective message for an out-of-range batch size.
pub fn file_count_range_message(min: usize, max: usize) -> String {
    format!("⚠️ Please specify a number between {min} and {max}.")
}

/// One-time owner alert for a newly seen user.
pub fn new_user_alert(first_name: &str, user_id: i64) -> String {
    format!("New User Alert! {first_name} (ID: {user_id}) has started the bot!")
}

/// Data center info text for a user.
///
/// A missing DC id renders as `Unknown`.
pub fn dc_info_message(first_name: &str, user_id: i64, dc_id: Option<i32>) -> String {
    let dc = dc_id.map_or_else(|| "Unknown".to_string(), |id| id.to_string());
    format!(
        "🌐 **DC Info:**\n\n\
         👤 **User:** [{first_name}](tg://user?id={user_id})\n\
         🆔 **ID:** `{user_id}`\n\
         🌐 **Data Center:** `{dc}`"
    )
}
