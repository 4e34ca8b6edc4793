//! User-facing message formatting for the medialink bot.
//!
//! Pure, deterministic construction of display strings and button-layout
//! descriptors. No I/O; malformed input renders as empty segments rather
//! than failing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buttons;
mod messages;

pub use buttons::{Button, ButtonRows, link_buttons, profile_button};
pub use messages::{
    about_message, batch_links_message, batch_summary_message, broadcast_complete_message,
    dc_info_message, error_message, file_count_range_message, help_message, links_message,
    new_user_alert, welcome_message,
};
