use std::sync::Arc;

use serde::Deserialize;

use crate::{DeliveryProvider, EmailJsProvider, SmtpProvider};

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    EmailJs,
    Smtp,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub contact_template_id: String,
    #[serde(default)]
    pub waitlist_template_id: String,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl DeliveryConfig {
    /// Waitlist signups reuse the contact template when no dedicated one is set.
    pub fn waitlist_template(&self) -> &str {
        if self.waitlist_template_id.is_empty() {
            &self.contact_template_id
        } else {
            &self.waitlist_template_id
        }
    }

    pub fn build_provider(&self) -> anyhow::Result<Arc<dyn DeliveryProvider>> {
        Ok(match self.provider {
            ProviderKind::EmailJs => Arc::new(EmailJsProvider::init(&self.emailjs)?),
            ProviderKind::Smtp => Arc::new(SmtpProvider::new(&self.smtp)?),
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_emailjs_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub public_key: String,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_emailjs_endpoint(),
            public_key: String::new(),
        }
    }
}

fn default_emailjs_endpoint() -> String {
    "https://api.emailjs.com".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: default_from_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "noreply@quickquid.in".to_string()
}
