use validator::{Validate, ValidationError};

use crate::{Rejection, SubmissionKind};

/// Gate a submission before any dispatch is attempted.
///
/// The email check is deliberately loose (non-empty and containing `@`):
/// it only catches obvious typos, it is not address validation. The email
/// is reported before the message when both are wrong.
pub fn validate(kind: &SubmissionKind) -> Result<(), Rejection> {
    let result = match kind {
        SubmissionKind::Contact(fields) => fields.validate(),
        SubmissionKind::Waitlist(fields) => fields.validate(),
    };

    let Err(errors) = result else {
        return Ok(());
    };

    if errors.field_errors().contains_key("email") {
        Err(Rejection::MissingOrInvalidEmail)
    } else {
        Err(Rejection::EmptyMessage)
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }

    Ok(())
}
