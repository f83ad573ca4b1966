use axum::{
    Json,
    extract::{Form, State, rejection::FormRejection},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use quickquid_submission::{Outcome, WaitlistFields};
use serde_json::json;

use crate::routes::{AppState, SubmitResponse};

/// GET /waitlist - Displayed waitlist count
pub async fn count(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "count": app_state.forms.waitlist_count(),
        "status": app_state.forms.waitlist.status(),
    }))
}

pub async fn action(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    input: Result<Form<WaitlistFields>, FormRejection>,
) -> Response {
    let Form(input) = match input {
        Ok(input) => input,
        Err(rejection) => {
            return SubmitResponse::malformed(app_state.forms.waitlist.status(), rejection);
        }
    };

    let page = app_state.page_context(&headers, "waitlist");
    let outcome = app_state.forms.waitlist.submit_fields(input, &page).await;
    let status = app_state.forms.waitlist.status();
    let admin_email = &app_state.config.site.admin_email;

    match outcome {
        Outcome::Rejected(reason) => SubmitResponse::rejected(status, reason),
        Outcome::Busy => SubmitResponse::busy(),
        Outcome::Cancelled => SubmitResponse::cancelled(),
        Outcome::Delivered { position } => SubmitResponse {
            position,
            ..SubmitResponse::new(
                status,
                format!(
                    "Welcome to the waitlist! You're now #{} on the list.",
                    position.unwrap_or_else(|| app_state.forms.waitlist_count())
                ),
            )
        }
        .into_response(),
        Outcome::FellBack(fallback) => SubmitResponse {
            handoff: Some(fallback.mailto_uri()),
            ..SubmitResponse::new(
                status,
                format!(
                    "Failed to join waitlist. Your email client is opening. Please send your email to {admin_email}"
                ),
            )
        }
        .into_response(),
    }
}
