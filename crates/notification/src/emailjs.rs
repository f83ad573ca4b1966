//! EmailJS REST client
//!
//! The browser SDK boils down to a single JSON POST against
//! `{endpoint}/api/v1.0/email/send`; this is that call, without the SDK.

use async_trait::async_trait;
use serde::Serialize;

use crate::{DeliveryProvider, EmailJsConfig, NotificationPayload};

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a NotificationPayload,
}

#[derive(Debug, Clone)]
pub struct EmailJsProvider {
    http: reqwest::Client,
    send_url: url::Url,
    public_key: String,
}

impl EmailJsProvider {
    /// Bind the provider to an account's public key. Called once at startup.
    pub fn init(config: &EmailJsConfig) -> anyhow::Result<Self> {
        if config.public_key.is_empty() {
            tracing::warn!("EmailJS public key not configured, every dispatch will be refused");
        }

        let base = url::Url::parse(&config.endpoint)?;
        let send_url = base.join("/api/v1.0/email/send")?;

        tracing::info!(endpoint = %send_url, "EmailJS provider initialized");

        Ok(Self {
            http: reqwest::Client::new(),
            send_url,
            public_key: config.public_key.to_owned(),
        })
    }
}

#[async_trait]
impl DeliveryProvider for EmailJsProvider {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        payload: &NotificationPayload,
    ) -> anyhow::Result<()> {
        tracing::info!(service_id, template_id, "Sending EmailJS notification");

        let resp = self
            .http
            .post(self.send_url.clone())
            .json(&SendRequest {
                service_id,
                template_id,
                user_id: &self.public_key,
                template_params: payload,
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("EmailJS responded with {status}: {body}");
        }

        Ok(())
    }
}
