use async_trait::async_trait;

use crate::NotificationPayload;

/// External service able to deliver a notification built from a template.
///
/// Implementations make exactly one attempt per call. Retrying is the
/// caller's business, and the submission pipeline deliberately never does.
#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &NotificationPayload,
    ) -> anyhow::Result<()>;
}
