//! Failure policy for collaborator errors.
//!
//! One place decides, per error kind, whether an operation notifies the
//! owner and aborts or notifies and continues, instead of each call site
//! improvising.

use medialink_error::MedialinkErrorKind;

/// What an operation does after a collaborator failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum FailureAction {
    /// Report a generic failure to the requester and stop the operation.
    Abort,
    /// Swallow the failure; it is not critical to the requester's outcome.
    Continue,
}

/// Maps error kinds to failure actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailurePolicy;

impl FailurePolicy {
    /// Decide the action for an error kind.
    ///
    /// Validation failures abort (the requester gets a corrective message
    /// instead of a generic one). Storage failures continue: persistence is
    /// never critical to link delivery. Chat, media, cache, and config
    /// failures abort the enclosing operation.
    pub fn action_for(&self, kind: &MedialinkErrorKind) -> FailureAction {
        match kind {
            MedialinkErrorKind::Storage(_) => FailureAction::Continue,
            MedialinkErrorKind::Validation(_)
            | MedialinkErrorKind::Chat(_)
            | MedialinkErrorKind::Media(_)
            | MedialinkErrorKind::Cache(_)
            | MedialinkErrorKind::Config(_) => FailureAction::Abort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medialink_error::{
        ChatError, MedialinkError, StorageError, ValidationError, ValidationErrorKind,
    };

    #[test]
    fn test_storage_continues() {
        let err = MedialinkError::from(StorageError::new("db down"));
        assert_eq!(
            FailurePolicy.action_for(err.kind()),
            FailureAction::Continue
        );
    }

    #[test]
    fn test_chat_aborts() {
        let err = MedialinkError::from(ChatError::new("flood wait"));
        assert_eq!(FailurePolicy.action_for(err.kind()), FailureAction::Abort);
    }

    #[test]
    fn test_validation_aborts() {
        let err = MedialinkError::from(ValidationError::new(
            ValidationErrorKind::FileCountOutOfRange {
                got: 26,
                min: 1,
                max: 25,
            },
        ));
        assert_eq!(FailurePolicy.action_for(err.kind()), FailureAction::Abort);
    }
}
