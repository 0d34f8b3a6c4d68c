use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Mount onboarding routes (nested under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/onboard", post(handlers::onboard::submit_onboarding))
}
