use std::sync::Arc;

use quickquid_notification::{DeliveryProvider, NotificationPayload};

use crate::DispatchError;

/// One form's route to the delivery provider: which service and template
/// its notifications go through.
#[derive(Clone)]
pub struct Dispatcher {
    provider: Arc<dyn DeliveryProvider>,
    service_id: String,
    template_id: String,
}

impl Dispatcher {
    pub fn new(
        provider: Arc<dyn DeliveryProvider>,
        service_id: impl Into<String>,
        template_id: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            service_id: service_id.into(),
            template_id: template_id.into(),
        }
    }

    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    /// A single attempt. Failure is final for this submission; the caller
    /// falls back to the manual hand-off instead of retrying.
    pub async fn dispatch(&self, payload: &NotificationPayload) -> Result<(), DispatchError> {
        self.provider
            .send(&self.service_id, &self.template_id, payload)
            .await?;

        Ok(())
    }
}
