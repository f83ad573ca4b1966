use std::sync::Arc;

use axum::{
    Json, Router,
    extract::rejection::FormRejection,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use quickquid_submission::{Forms, PageContext, Rejection, SubmissionStatus};
use serde::Serialize;

use crate::config::Config;

mod contact;
mod health;
mod status;
mod waitlist;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub forms: Forms,
}

impl AppState {
    pub fn new(config: Config, forms: Forms) -> Self {
        Self {
            config: Arc::new(config),
            forms,
        }
    }

    /// Where the visitor submitted from and who they are, as far as the
    /// request tells us. The section anchor stands in for a missing Referer.
    fn page_context(&self, headers: &HeaderMap, anchor: &str) -> PageContext {
        let url = headers
            .get(header::REFERER)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| format!("{}#{anchor}", self.config.site.page_url));

        let client_id = headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("unknown");

        PageContext::new(url, client_id)
    }
}

/// Body returned for every submit attempt.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: SubmissionStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u64>,
    /// Pre-filled mail link for the visitor to open when delivery failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handoff: Option<String>,
}

impl SubmitResponse {
    fn new(status: SubmissionStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            position: None,
            handoff: None,
        }
    }

    fn rejected(status: SubmissionStatus, reason: Rejection) -> Response {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(Self::new(status, reason.to_string())),
        )
            .into_response()
    }

    /// Undecodable form bodies get the same JSON shape as every other outcome.
    fn malformed(status: SubmissionStatus, rejection: FormRejection) -> Response {
        tracing::debug!(%rejection, "Submission body rejected");

        (rejection.status(), Json(Self::new(status, rejection.body_text()))).into_response()
    }

    fn cancelled() -> Response {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Self::new(
                SubmissionStatus::Idle,
                "The form is shutting down, please try again",
            )),
        )
            .into_response()
    }

    fn busy() -> Response {
        (
            StatusCode::CONFLICT,
            Json(Self::new(
                SubmissionStatus::Sending,
                "A submission is already in progress",
            )),
        )
            .into_response()
    }
}

impl IntoResponse for SubmitResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/status", get(status::status))
        .route("/contact", post(contact::action))
        .route("/waitlist", get(waitlist::count).post(waitlist::action))
        .with_state(app_state)
}
