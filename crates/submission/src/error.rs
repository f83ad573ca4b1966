/// Why a submission was refused before anything left the page.
///
/// The display strings are what the visitor sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Please enter a valid email address")]
    MissingOrInvalidEmail,

    #[error("Please enter a message")]
    EmptyMessage,
}

/// The delivery provider could not deliver a notification.
///
/// Carries the underlying cause for logs only; visitors are shown the
/// fallback banner instead.
#[derive(Debug, thiserror::Error)]
#[error("notification dispatch failed: {0:#}")]
pub struct DispatchError(#[from] anyhow::Error);

impl DispatchError {
    pub fn cause(&self) -> &anyhow::Error {
        &self.0
    }
}
