use time::{
    OffsetDateTime, UtcOffset, format_description::well_known::Rfc3339, macros::format_description,
};

pub const CLIENT_ID_MAX_CHARS: usize = 100;

/// Read-only facts about the page a form was submitted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    pub url: String,
    pub client_id: String,
}

impl PageContext {
    /// The client identifier (usually a user agent) is cut to
    /// [`CLIENT_ID_MAX_CHARS`] characters.
    pub fn new(url: impl Into<String>, client_id: impl AsRef<str>) -> Self {
        Self {
            url: url.into(),
            client_id: client_id
                .as_ref()
                .chars()
                .take(CLIENT_ID_MAX_CHARS)
                .collect(),
        }
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock rendered in a fixed display offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset_minutes: i32) -> Self {
        let offset = UtcOffset::from_whole_seconds(offset_minutes.saturating_mul(60))
            .unwrap_or(UtcOffset::UTC);

        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

/// `Monday, 19 October 2026 at 02:30 pm UTC+05:30`
pub fn long_date(at: OffsetDateTime) -> String {
    let format = format_description!(
        "[weekday], [day padding:none] [month repr:long] [year] at [hour repr:12]:[minute] [period case:lower] UTC[offset_hour sign:mandatory]:[offset_minute]"
    );

    at.format(format).unwrap_or_default()
}

/// `19/10/2026, 2:30:05 pm`
pub fn short_date(at: OffsetDateTime) -> String {
    let format = format_description!(
        "[day]/[month]/[year], [hour repr:12 padding:none]:[minute]:[second] [period case:lower]"
    );

    at.format(format).unwrap_or_default()
}

pub fn iso_timestamp(at: OffsetDateTime) -> String {
    at.format(&Rfc3339).unwrap_or_default()
}
