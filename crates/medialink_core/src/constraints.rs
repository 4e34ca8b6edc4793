//! Static limits and pure validation predicates.
//!
//! Centralizes the numeric and set constraints the operations layer
//! consults. Everything here is pure and infallible on well-typed input.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

/// Maximum number of files a single batch command may request.
pub const MAX_FILES_PER_COMMAND: usize = 25;

/// Minimum number of files a single batch command may request.
pub const MIN_FILES_PER_COMMAND: usize = 1;

/// Upper bound on users targeted by one broadcast.
pub const MAX_BROADCAST_USERS: usize = 10_000;

/// Chat platform message length limit in characters.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Maximum stored file size in bytes (2 GiB platform limit).
pub const MAX_FILE_SIZE: u64 = 2_097_152_000;

/// Check whether a requested file count is within the accepted range.
///
/// # Examples
///
/// ```
/// use medialink_core::validate_file_count;
///
/// assert!(validate_file_count(1));
/// assert!(validate_file_count(25));
/// assert!(!validate_file_count(0));
/// assert!(!validate_file_count(26));
/// assert!(!validate_file_count(-3));
/// ```
pub fn validate_file_count(count: i64) -> bool {
    count >= MIN_FILES_PER_COMMAND as i64 && count <= MAX_FILES_PER_COMMAND as i64
}

/// Check whether message text fits the platform length limit.
///
/// Length is counted in characters, matching the platform's limit.
pub fn validate_message_length(text: &str) -> bool {
    text.chars().count() <= MAX_MESSAGE_LENGTH
}

/// Role names recognized by the role table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum UserRole {
    /// Full administrative access
    Admin,
    /// Moderation access
    Moderator,
    /// Default role
    User,
}

/// Membership sets per role.
///
/// Role checks exist for callers to consult; no policy engine is wired to
/// them.
///
/// # Examples
///
/// ```
/// use medialink_core::{RoleTable, UserRole};
///
/// let mut roles = RoleTable::default();
/// roles.grant(UserRole::Admin, 7);
/// assert!(roles.check_user_role(7, "admin"));
/// assert!(!roles.check_user_role(7, "moderator"));
/// assert!(!roles.check_user_role(7, "root"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoleTable {
    members: HashMap<UserRole, HashSet<i64>>,
}

impl RoleTable {
    /// Add a user id to a role's membership set.
    pub fn grant(&mut self, role: UserRole, user_id: i64) {
        self.members.entry(role).or_default().insert(user_id);
    }

    /// True iff `role` names a known role and `user_id` belongs to it.
    pub fn check_user_role(&self, user_id: i64, role: &str) -> bool {
        let Ok(role) = UserRole::from_str(role) else {
            return false;
        };
        self.members
            .get(&role)
            .is_some_and(|ids| ids.contains(&user_id))
    }
}

/// Channels the bot refuses to serve.
///
/// Default empty; populated from configuration.
#[derive(Debug, Clone, Default)]
pub struct BannedChannels(HashSet<i64>);

impl BannedChannels {
    /// Build from a list of chat ids.
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// True iff the chat id is banned.
    pub fn contains(&self, chat_id: i64) -> bool {
        self.0.contains(&chat_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_count_bounds() {
        assert!(validate_file_count(1));
        assert!(validate_file_count(13));
        assert!(validate_file_count(25));
        assert!(!validate_file_count(0));
        assert!(!validate_file_count(26));
        assert!(!validate_file_count(-1));
        assert!(!validate_file_count(i64::MIN));
    }

    #[test]
    fn test_validate_message_length() {
        assert!(validate_message_length(""));
        assert!(validate_message_length(&"x".repeat(4096)));
        assert!(!validate_message_length(&"x".repeat(4097)));
    }

    #[test]
    fn test_message_length_counts_chars_not_bytes() {
        // 4096 multibyte chars are within the limit even though the byte
        // count is larger.
        assert!(validate_message_length(&"é".repeat(4096)));
    }

    #[test]
    fn test_role_parsing() {
        let mut roles = RoleTable::default();
        roles.grant(UserRole::Moderator, 11);
        assert!(roles.check_user_role(11, "moderator"));
        assert!(!roles.check_user_role(11, "Moderator-ish"));
        assert!(!roles.check_user_role(11, ""));
        assert!(!roles.check_user_role(12, "moderator"));
    }

    #[test]
    fn test_banned_channels() {
        let banned = BannedChannels::new([-100123, -100456]);
        assert!(banned.contains(-100123));
        assert!(!banned.contains(-100789));
        assert!(!BannedChannels::default().contains(-100123));
    }
}
