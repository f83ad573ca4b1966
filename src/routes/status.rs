use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /status - Current banner state of both forms
pub async fn status(State(app_state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "contact": app_state.forms.contact.status(),
        "waitlist": app_state.forms.waitlist.status(),
    }))
}
