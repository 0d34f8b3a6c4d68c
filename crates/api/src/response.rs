//! Shared response envelope for the intake API.
//!
//! Every outcome of a submission is answered as
//! `{ "success": bool, "message": string }`, which is the shape the
//! form client decodes. Use [`StatusResponse`] instead of ad-hoc
//! `serde_json::json!` literals for the success path.

use serde::Serialize;

/// Standard `{ success, message }` response envelope.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    /// A successful outcome with a confirmation message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
