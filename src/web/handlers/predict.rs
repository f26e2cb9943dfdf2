// POST /api/predict — classify a single posting.
//
// Body: a JobPosting as JSON. Returns the VerdictView as JSON.
// Returns 502 Bad Gateway if the classifier fails; the form shows the
// error message instead of a verdict.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::handler::handle;
use crate::posting::JobPosting;
use crate::web::{api_error, AppState};

/// POST /api/predict — run the posting through the classifier.
pub async fn predict(
    State(state): State<AppState>,
    Json(posting): Json<JobPosting>,
) -> impl IntoResponse {
    match handle(&posting, state.classifier.as_ref()).await {
        Ok(view) => Json(view).into_response(),
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "Classification failed");
            api_error(StatusCode::BAD_GATEWAY, "Classifier unavailable")
        }
    }
}
