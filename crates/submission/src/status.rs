use serde::Serialize;
use strum::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl SubmissionStatus {
    /// Success and error are banners that time out back to idle.
    pub fn is_transient(self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }
}
