//! Inline button layout descriptors.
//!
//! Plain data the chat client collaborator renders into platform markup.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single inline button: label plus target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Button {
    /// Button label shown to the user
    #[new(into)]
    label: String,
    /// Target URL
    #[new(into)]
    url: String,
}

/// Rows of inline buttons, outer Vec per row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonRows(pub Vec<Vec<Button>>);

impl ButtonRows {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One row with Watch and Download buttons for a link pair.
///
/// # Examples
///
/// ```
/// use medialink_format::link_buttons;
///
/// let rows = link_buttons("https://s", "https://d");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows.0[0].len(), 2);
/// ```
pub fn link_buttons(stream_url: &str, download_url: &str) -> ButtonRows {
    ButtonRows(vec![vec![
        Button::new("🖥️ Watch", stream_url),
        Button::new("📥 Download", download_url),
    ]])
}

/// Single button linking to a user's profile.
pub fn profile_button(user_id: i64) -> ButtonRows {
    ButtonRows(vec![vec![Button::new(
        "🔍 Profile",
        format!("tg://user?id={user_id}"),
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_buttons_single_row() {
        let rows = link_buttons("https://s", "https://d");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows.0[0][0].label(), "🖥️ Watch");
        assert_eq!(rows.0[0][0].url(), "https://s");
        assert_eq!(rows.0[0][1].url(), "https://d");
    }

    #[test]
    fn test_profile_button_url() {
        let rows = profile_button(99);
        assert_eq!(rows.0[0][0].url(), "tg://user?id=99");
    }
}
