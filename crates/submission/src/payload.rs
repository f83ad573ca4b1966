use quickquid_notification::NotificationPayload;
use time::OffsetDateTime;

use crate::{PageContext, SiteConfig, SubmissionKind, iso_timestamp, long_date};

/// Template parameters for one submit event.
///
/// `waitlist_number` is the position the signup will take if delivery
/// succeeds, i.e. the counter value at submission time plus one.
pub fn notification_payload(
    kind: &SubmissionKind,
    site: &SiteConfig,
    page: &PageContext,
    at: OffsetDateTime,
    waitlist_number: Option<u64>,
) -> NotificationPayload {
    let payload = NotificationPayload::new()
        .with("to_email", site.admin_email.as_str())
        .with("date", long_date(at))
        .with("page_url", page.url.as_str())
        .with("user_agent", page.client_id.as_str());

    match kind {
        SubmissionKind::Contact(fields) => {
            let name = fields.name.trim();

            payload
                .with("from_name", or_default(name, "Anonymous User"))
                .with("from_email", fields.email.as_str())
                .with("reply_to", fields.email.as_str())
                .with("user_email", fields.email.as_str())
                .with("user_name", or_default(name, "Not provided"))
                .with("message", fields.message.as_str())
                .with("ip_address", "Not available")
                .with("timestamp", iso_timestamp(at))
        }
        SubmissionKind::Waitlist(fields) => {
            let payload = payload
                .with("user_email", fields.email.as_str())
                .with("source", site.source.as_str());

            match waitlist_number {
                Some(number) => payload.with("waitlist_number", number),
                None => payload,
            }
        }
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}
