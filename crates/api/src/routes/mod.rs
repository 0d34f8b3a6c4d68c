pub mod health;
pub mod onboard;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /onboard    POST    submit one onboarding record
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(onboard::router())
}
