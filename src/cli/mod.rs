pub mod server;
pub mod submit;

use std::sync::Arc;

use anyhow::Result;
use quickquid_submission::{Forms, MailHandoff, SystemClock};

use crate::config::Config;

/// Wire a contact form and a waitlist form to the configured provider.
pub fn build_forms(config: &Config, handoff: Arc<dyn MailHandoff>) -> Result<Forms> {
    let provider = config.delivery.build_provider()?;

    Ok(Forms::new(
        config.site.clone(),
        config.submission,
        &config.delivery,
        provider,
        Arc::new(SystemClock::new(config.site.display_offset_minutes)),
        handoff,
    ))
}
