use std::time::Duration;

use serde::Deserialize;

/// Site-wide facts the pipeline stamps into notifications and fallbacks.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_page_url")]
    pub page_url: String,
    /// Illustrative starting point for the waitlist counter. Not a real count.
    #[serde(default = "default_waitlist_seed")]
    pub waitlist_seed: u64,
    #[serde(default = "default_display_offset_minutes")]
    pub display_offset_minutes: i32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            brand: default_brand(),
            source: default_source(),
            page_url: default_page_url(),
            waitlist_seed: default_waitlist_seed(),
            display_offset_minutes: default_display_offset_minutes(),
        }
    }
}

fn default_admin_email() -> String {
    "contact@quickquid.in".to_string()
}

fn default_brand() -> String {
    "QuickQuid".to_string()
}

fn default_source() -> String {
    "QuickQuid Website".to_string()
}

fn default_page_url() -> String {
    "https://quickquid.in/".to_string()
}

fn default_waitlist_seed() -> u64 {
    1247
}

fn default_display_offset_minutes() -> i32 {
    330
}

/// How long the success and error banners stay up before the form resets.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct TimingConfig {
    #[serde(default = "default_success_reset_secs")]
    pub success_reset_secs: u64,
    #[serde(default = "default_error_reset_secs")]
    pub error_reset_secs: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            success_reset_secs: default_success_reset_secs(),
            error_reset_secs: default_error_reset_secs(),
        }
    }
}

impl TimingConfig {
    pub fn success_reset(&self) -> Duration {
        Duration::from_secs(self.success_reset_secs)
    }

    pub fn error_reset(&self) -> Duration {
        Duration::from_secs(self.error_reset_secs)
    }
}

fn default_success_reset_secs() -> u64 {
    5
}

fn default_error_reset_secs() -> u64 {
    8
}
