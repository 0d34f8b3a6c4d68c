//! Client intake record model and insert DTO.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use onboard_core::submission::OnboardingSubmission;
use onboard_core::types::{DbId, Timestamp};

/// A row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    /// Service labels as submitted (e.g. `"UI/UX"`).
    pub services: Vec<String>,
    pub budget_usd: i64,
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
    /// Assigned by the store on insert; never updated afterwards.
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert DTO for a new client row.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: Vec<String>,
    pub budget_usd: i64,
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
}

impl From<&OnboardingSubmission> for NewClient {
    fn from(submission: &OnboardingSubmission) -> Self {
        Self {
            full_name: submission.full_name.clone(),
            email: submission.email.clone(),
            company_name: submission.company_name.clone(),
            services: submission
                .services
                .iter()
                .map(|svc| svc.label().to_string())
                .collect(),
            budget_usd: submission.budget_usd,
            project_start_date: submission.project_start_date,
            accept_terms: submission.accept_terms,
        }
    }
}
