//! Handler for onboarding submissions.

use axum::extract::State;
use axum::Json;
use chrono::Utc;

use onboard_core::submission::OnboardingSubmission;
use onboard_core::validation;
use onboard_db::models::client::NewClient;
use onboard_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::response::StatusResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /api/onboard
// ---------------------------------------------------------------------------

/// Accept one onboarding submission and persist it.
///
/// The record was already validated by the form, but this process is
/// the trust boundary, so the shared constraint set is re-run here with
/// "today" recomputed per request. A clean record becomes a single
/// `clients` insert; any persistence failure is logged and answered
/// with the generic failure envelope.
pub async fn submit_onboarding(
    State(state): State<AppState>,
    Json(submission): Json<OnboardingSubmission>,
) -> AppResult<Json<StatusResponse>> {
    let today = Utc::now().date_naive();
    let violations = validation::check_submission(&submission, today);
    if !violations.is_empty() {
        tracing::debug!(
            count = violations.len(),
            "Rejected submission at the trust boundary"
        );
        return Err(AppError::Validation(violations));
    }

    let record = ClientRepo::create(&state.pool, &NewClient::from(&submission)).await?;

    tracing::info!(client_id = record.id, "Client onboarding stored");

    Ok(Json(StatusResponse::ok("Client details added successfully")))
}
