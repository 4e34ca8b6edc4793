//! Core data types for the medialink bot utilities.
//!
//! This crate provides the foundation data types used across the medialink
//! workspace: media references, derived link pairs, broadcast statistics,
//! the constraint table, and human-readable unit formatting.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod broadcast;
mod constraints;
mod link;
mod media;
mod telemetry;
mod units;

pub use broadcast::BroadcastStats;
pub use constraints::{
    BannedChannels, RoleTable, UserRole, MAX_BROADCAST_USERS, MAX_FILES_PER_COMMAND, MAX_FILE_SIZE,
    MAX_MESSAGE_LENGTH, MIN_FILES_PER_COMMAND, validate_file_count, validate_message_length,
};
pub use link::LinkPair;
pub use media::MediaReference;
pub use telemetry::init_telemetry;
pub use units::{human_bytes, readable_duration};
