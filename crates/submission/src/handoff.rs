use crate::FallbackPayload;

/// Opens the visitor's own mail client on a pre-filled message.
///
/// Fire and forget: nothing about the result flows back to the controller.
pub trait MailHandoff: Send + Sync {
    fn open(&self, fallback: &FallbackPayload);
}

/// Records the hand-off in the logs. Used where the mail URI is returned
/// to the caller rather than opened locally.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingHandoff;

impl MailHandoff for TracingHandoff {
    fn open(&self, fallback: &FallbackPayload) {
        tracing::info!(
            recipient = %fallback.recipient,
            subject = %fallback.subject,
            "Handing submission off to the visitor's mail client"
        );
    }
}
