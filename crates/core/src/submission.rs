//! The onboarding submission entity: in-progress draft and validated
//! wire record.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::service::Service;
use crate::validation::{self, FieldViolation};

/// A validated onboarding submission -- the JSON record POSTed to the
/// service and re-checked there.
///
/// Field names serialize in camelCase to match the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingSubmission {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: Vec<Service>,
    pub budget_usd: i64,
    pub project_start_date: NaiveDate,
    pub accept_terms: bool,
}

/// An in-progress draft with fields as the user entered them.
///
/// Budget and date stay raw text until validation; empty input is
/// invalid input, never coerced. Services accumulate and drop as the
/// user toggles each option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub full_name: String,
    pub email: String,
    pub company_name: String,
    pub services: BTreeSet<Service>,
    pub budget_usd: String,
    pub project_start_date: String,
    pub accept_terms: bool,
}

impl SubmissionDraft {
    /// Validate every field and convert the draft into a wire record.
    ///
    /// All fields are checked -- nothing short-circuits on the first
    /// failure. The error side carries one violation per violating
    /// field, in form order, keyed by wire field name.
    pub fn finalize(&self, today: NaiveDate) -> Result<OnboardingSubmission, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        if let Some(v) = validation::check_full_name(&self.full_name) {
            violations.push(v);
        }
        if let Some(v) = validation::check_email(&self.email) {
            violations.push(v);
        }
        if let Some(v) = validation::check_company_name(&self.company_name) {
            violations.push(v);
        }
        if let Some(v) = validation::check_services(self.services.len()) {
            violations.push(v);
        }

        let budget_usd = match validation::check_budget_raw(&self.budget_usd) {
            Ok(value) => Some(value),
            Err(v) => {
                violations.push(v);
                None
            }
        };
        let project_start_date =
            match validation::check_start_date_raw(&self.project_start_date, today) {
                Ok(date) => Some(date),
                Err(v) => {
                    violations.push(v);
                    None
                }
            };

        if let Some(v) = validation::check_accept_terms(self.accept_terms) {
            violations.push(v);
        }

        match (budget_usd, project_start_date) {
            (Some(budget_usd), Some(project_start_date)) if violations.is_empty() => {
                Ok(OnboardingSubmission {
                    full_name: self.full_name.clone(),
                    email: self.email.clone(),
                    company_name: self.company_name.clone(),
                    services: self.services.iter().copied().collect(),
                    budget_usd,
                    project_start_date,
                    accept_terms: self.accept_terms,
                })
            }
            _ => Err(violations),
        }
    }
}
