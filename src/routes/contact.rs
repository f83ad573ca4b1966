use axum::{
    extract::{Form, State, rejection::FormRejection},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use quickquid_submission::{ContactFields, Outcome};

use crate::routes::{AppState, SubmitResponse};

pub async fn action(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    input: Result<Form<ContactFields>, FormRejection>,
) -> Response {
    let Form(input) = match input {
        Ok(input) => input,
        Err(rejection) => {
            return SubmitResponse::malformed(app_state.forms.contact.status(), rejection);
        }
    };

    let page = app_state.page_context(&headers, "contact");
    let outcome = app_state.forms.contact.submit_fields(input, &page).await;
    let status = app_state.forms.contact.status();
    let admin_email = &app_state.config.site.admin_email;

    match outcome {
        Outcome::Rejected(reason) => SubmitResponse::rejected(status, reason),
        Outcome::Busy => SubmitResponse::busy(),
        Outcome::Cancelled => SubmitResponse::cancelled(),
        Outcome::Delivered { .. } => SubmitResponse::new(
            status,
            format!("Message sent successfully! We've received your message at {admin_email}"),
        )
        .into_response(),
        Outcome::FellBack(fallback) => SubmitResponse {
            handoff: Some(fallback.mailto_uri()),
            ..SubmitResponse::new(
                status,
                format!(
                    "Sending failed - Using fallback method. Your email client is opening. Please send manually to: {admin_email}"
                ),
            )
        }
        .into_response(),
    }
}
