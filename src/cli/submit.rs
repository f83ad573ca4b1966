use std::sync::Arc;

use anyhow::{Result, bail};
use quickquid_submission::{
    ContactFields, FallbackPayload, MailHandoff, Outcome, PageContext, WaitlistFields,
};

use crate::config::Config;

/// Prints the pre-filled mail link so the operator can open it by hand.
struct TerminalHandoff;

impl MailHandoff for TerminalHandoff {
    fn open(&self, fallback: &FallbackPayload) {
        println!("Open this link to send the message from your own mail client:");
        println!("{}", fallback.mailto_uri());
    }
}

fn terminal_page(config: &Config) -> PageContext {
    PageContext::new(
        config.site.page_url.as_str(),
        concat!("quickquid-cli/", env!("CARGO_PKG_VERSION")),
    )
}

pub async fn contact(config: Config, fields: ContactFields) -> Result<()> {
    let forms = super::build_forms(&config, Arc::new(TerminalHandoff))?;

    match forms.contact.submit_fields(fields, &terminal_page(&config)).await {
        Outcome::Delivered { .. } => {
            println!(
                "Message sent successfully! We've received your message at {}",
                config.site.admin_email
            );
        }
        Outcome::FellBack(_) => {
            println!(
                "Sending failed. Please send the message manually to: {}",
                config.site.admin_email
            );
        }
        Outcome::Rejected(reason) => bail!(reason),
        Outcome::Busy => bail!("a contact submission is already in progress"),
        Outcome::Cancelled => bail!("the contact form was torn down before delivery settled"),
    }

    Ok(())
}

pub async fn waitlist(config: Config, fields: WaitlistFields) -> Result<()> {
    let forms = super::build_forms(&config, Arc::new(TerminalHandoff))?;

    match forms.waitlist.submit_fields(fields, &terminal_page(&config)).await {
        Outcome::Delivered { position } => {
            let position = position.unwrap_or_else(|| forms.waitlist_count());
            println!("Welcome to the waitlist! You're now #{position} on the list.");
        }
        Outcome::FellBack(_) => {
            println!(
                "Failed to join waitlist. Please send your email to {}",
                config.site.admin_email
            );
        }
        Outcome::Rejected(reason) => bail!(reason),
        Outcome::Busy => bail!("a waitlist submission is already in progress"),
        Outcome::Cancelled => bail!("the waitlist form was torn down before delivery settled"),
    }

    Ok(())
}
