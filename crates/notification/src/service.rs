//! SMTP delivery using lettre

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::header,
    transport::smtp::authentication::Credentials,
};
use serde_json::Value;

use crate::{DeliveryProvider, NotificationPayload, SmtpConfig};

/// Delivers notifications as plain-text mail through an SMTP relay.
///
/// Template ids have no meaning to SMTP; the whole payload is rendered into
/// the body instead.
#[derive(Clone)]
pub struct SmtpProvider {
    mailer: SmtpTransport,
    from: String,
}

impl SmtpProvider {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let authenticated = !config.smtp_username.is_empty() && !config.smtp_password.is_empty();

        let transport = if authenticated {
            SmtpTransport::relay(&config.smtp_host)?.credentials(Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            ))
        } else {
            // Local catch-all relays such as MailDev take plain connections
            SmtpTransport::builder_dangerous(&config.smtp_host)
        };

        tracing::info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            from = %config.from_address,
            authenticated,
            "SMTP provider initialized"
        );

        Ok(Self {
            mailer: transport.port(config.smtp_port).build(),
            from: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl DeliveryProvider for SmtpProvider {
    async fn send(
        &self,
        _service_id: &str,
        template_id: &str,
        payload: &NotificationPayload,
    ) -> anyhow::Result<()> {
        let Some(to) = payload.recipient() else {
            anyhow::bail!("notification payload has no to_email");
        };

        tracing::info!(to, template_id, "Sending email text plain");

        let mut builder = Message::builder()
            .from(self.from.parse()?)
            .to(to.parse()?)
            .subject(subject_for(payload))
            .header(header::ContentType::TEXT_PLAIN);

        if let Some(reply_to) = payload.get_str("reply_to") {
            builder = builder.reply_to(reply_to.parse()?);
        }

        let message = builder.body(render_plain(payload))?;
        let mailer = self.mailer.clone();

        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}

fn subject_for(payload: &NotificationPayload) -> String {
    match payload.get("waitlist_number") {
        Some(number) => format!("New waitlist signup #{number}"),
        None => "New message from contact page".to_owned(),
    }
}

/// One `key: value` line per template parameter, in key order.
pub fn render_plain(payload: &NotificationPayload) -> String {
    payload
        .iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{key}: {s}"),
            other => format!("{key}: {other}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
