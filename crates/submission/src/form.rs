use std::fmt::Debug;

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    #[validate(contains(pattern = "@"))]
    pub email: String,
    #[serde(default)]
    #[validate(custom(function = "crate::validate::not_blank"))]
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct WaitlistFields {
    #[serde(default)]
    #[validate(contains(pattern = "@"))]
    pub email: String,
}

/// A submit event's fields, tagged with the form they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionKind {
    Contact(ContactFields),
    Waitlist(WaitlistFields),
}

impl SubmissionKind {
    pub fn email(&self) -> &str {
        match self {
            SubmissionKind::Contact(fields) => &fields.email,
            SubmissionKind::Waitlist(fields) => &fields.email,
        }
    }
}

/// Form-specific half of a [`crate::SubmissionController`].
pub trait FormKind: Send + Sync + 'static {
    type Fields: Clone + Default + Debug + PartialEq + Send + Sync + 'static;

    const NAME: &'static str;

    fn kind(fields: &Self::Fields) -> SubmissionKind;
}

pub struct ContactForm;

impl FormKind for ContactForm {
    type Fields = ContactFields;

    const NAME: &'static str = "contact";

    fn kind(fields: &ContactFields) -> SubmissionKind {
        SubmissionKind::Contact(fields.clone())
    }
}

pub struct WaitlistForm;

impl FormKind for WaitlistForm {
    type Fields = WaitlistFields;

    const NAME: &'static str = "waitlist";

    fn kind(fields: &WaitlistFields) -> SubmissionKind {
        SubmissionKind::Waitlist(fields.clone())
    }
}
