use serde::Serialize;
use time::OffsetDateTime;

use crate::{PageContext, SiteConfig, SubmissionKind, short_date};

const RULE: &str = "────────────────";

/// A pre-filled message the visitor can send by hand when dispatch fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackPayload {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    /// Contact submitters get a copy of their own message.
    pub cc: Option<String>,
}

impl FallbackPayload {
    /// `mailto:<recipient>?subject=..&body=..[&cc=..]`, percent-encoded.
    pub fn mailto_uri(&self) -> String {
        let mut uri = format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        );

        if let Some(cc) = &self.cc {
            uri.push_str("&cc=");
            uri.push_str(&urlencoding::encode(cc));
        }

        uri
    }
}

/// Build the manual hand-off for a submission. Pure and total: validated
/// fields always produce a payload.
pub fn compose_fallback(
    kind: &SubmissionKind,
    site: &SiteConfig,
    page: &PageContext,
    at: OffsetDateTime,
) -> FallbackPayload {
    let date = short_date(at);

    match kind {
        SubmissionKind::Contact(fields) => {
            let name = if fields.name.is_empty() {
                "User"
            } else {
                fields.name.as_str()
            };
            let shown_name = if fields.name.is_empty() {
                "Not provided"
            } else {
                fields.name.as_str()
            };

            let body = format!(
                "User Information:\n{RULE}\nName: {shown_name}\nEmail: {email}\nDate: {date}\nPage: {url}\n\nMessage:\n{RULE}\n{message}\n\n{RULE}\nThis message was submitted via {brand} contact form but failed to send automatically.\nPlease reply directly to: {email}",
                email = fields.email,
                url = page.url,
                message = fields.message,
                brand = site.brand,
            );

            FallbackPayload {
                recipient: site.admin_email.to_owned(),
                subject: format!("Contact Form: {name} - {}", site.brand),
                body: body.trim().to_owned(),
                cc: Some(fields.email.to_owned()),
            }
        }
        SubmissionKind::Waitlist(fields) => FallbackPayload {
            recipient: site.admin_email.to_owned(),
            subject: format!("New Waitlist Signup: {}", fields.email),
            body: format!(
                "New waitlist signup received:\n\nEmail: {}\nDate: {date}\n\n---\n{} Waitlist",
                fields.email, site.brand
            ),
            cc: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::{ContactFields, WaitlistFields};

    fn page() -> PageContext {
        PageContext::new("https://quickquid.in/", "Mozilla/5.0")
    }

    #[test]
    fn waitlist_fallback() {
        let kind = SubmissionKind::Waitlist(WaitlistFields {
            email: "x@y.edu".to_owned(),
        });
        let at = datetime!(2026-10-19 14:30:05 +05:30);
        let fallback = compose_fallback(&kind, &SiteConfig::default(), &page(), at);

        assert_eq!(fallback.recipient, "contact@quickquid.in");
        assert_eq!(fallback.subject, "New Waitlist Signup: x@y.edu");
        assert_eq!(
            fallback.body,
            "New waitlist signup received:\n\nEmail: x@y.edu\nDate: 19/10/2026, 2:30:05 pm\n\n---\nQuickQuid Waitlist"
        );
        assert_eq!(fallback.cc, None);
        assert!(!fallback.mailto_uri().contains("&cc="));
    }

    #[test]
    fn contact_fallback_copies_the_sender() {
        let kind = SubmissionKind::Contact(ContactFields {
            name: String::new(),
            email: "a+b@c.edu".to_owned(),
            message: "hello\nthere".to_owned(),
        });
        let at = datetime!(2026-10-19 14:30:05 +05:30);
        let fallback = compose_fallback(&kind, &SiteConfig::default(), &page(), at);

        assert_eq!(fallback.subject, "Contact Form: User - QuickQuid");
        assert!(fallback.body.starts_with("User Information:"));
        assert!(fallback.body.contains("Name: Not provided\n"));
        assert!(fallback.body.contains("Page: https://quickquid.in/\n"));
        assert!(fallback.body.contains("\nhello\nthere\n"));
        assert!(
            fallback
                .body
                .ends_with("Please reply directly to: a+b@c.edu")
        );
        assert!(
            fallback
                .mailto_uri()
                .starts_with("mailto:contact@quickquid.in?subject=Contact%20Form%3A%20User")
        );
        assert!(fallback.mailto_uri().ends_with("&cc=a%2Bb%40c.edu"));
    }

    #[test]
    fn encoded_parts_decode_back_to_plain_text() {
        let kind = SubmissionKind::Contact(ContactFields {
            name: "Zoë & co".to_owned(),
            email: "z@y.edu".to_owned(),
            message: "100% sure? a=b&c=d #tag".to_owned(),
        });
        let at = datetime!(2026-10-19 14:30:05 +05:30);
        let fallback = compose_fallback(&kind, &SiteConfig::default(), &page(), at);
        let uri = fallback.mailto_uri();
        let query = uri.split_once('?').unwrap().1;

        let parts: Vec<(&str, String)> = query
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (key, urlencoding::decode(value).unwrap().into_owned())
            })
            .collect();

        assert_eq!(parts[0], ("subject", fallback.subject.clone()));
        assert_eq!(parts[1], ("body", fallback.body.clone()));
        assert_eq!(parts[2], ("cc", "z@y.edu".to_owned()));
        assert!(parts[1].1.contains("100% sure? a=b&c=d #tag"));
    }

    #[test]
    fn composing_twice_is_identical() {
        let kind = SubmissionKind::Waitlist(WaitlistFields {
            email: "x@y.edu".to_owned(),
        });
        let at = datetime!(2026-10-19 14:30:05 +05:30);
        let site = SiteConfig::default();

        assert_eq!(
            compose_fallback(&kind, &site, &page(), at),
            compose_fallback(&kind, &site, &page(), at)
        );
    }
}
