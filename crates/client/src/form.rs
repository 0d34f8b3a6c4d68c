//! Explicit form state for the onboarding intake.
//!
//! Validation policy: every update function re-validates only the field
//! it touches; [`FormState::begin_submit`] validates all fields. Errors
//! are kept per field, keyed by wire field name, so a frontend can
//! render them inline.

use std::collections::BTreeMap;

use chrono::Utc;

use onboard_core::service::Service;
use onboard_core::submission::{OnboardingSubmission, SubmissionDraft};
use onboard_core::validation::{check_draft_field, Field};

/// Transient user-facing notice shown after a submit attempt settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The submission was stored.
    Success(String),
    /// The submission failed; the form keeps its values for retry.
    Failure(String),
}

/// Why a submit attempt did not start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    /// A previous request is still outstanding.
    #[error("A submission is already in flight")]
    InFlight,
    /// One or more fields are invalid; the errors are on the form.
    #[error("The form has validation errors")]
    Invalid,
}

/// Outcome of a settled submit attempt, as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service acknowledged the record.
    Delivered(String),
    /// The request failed or was rejected.
    Failed(String),
}

/// Mutable state of the intake form.
///
/// The container is passed by `&mut` reference; there is no ambient
/// framework context. While a submission is outstanding the form
/// refuses to start another one -- advisory only, nothing server-side
/// enforces it.
#[derive(Debug, Default)]
pub struct FormState {
    draft: SubmissionDraft,
    errors: BTreeMap<&'static str, String>,
    submitting: bool,
    notice: Option<Notice>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current draft values.
    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    // -- Per-field update functions -------------------------------------

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.draft.full_name = value.into();
        self.revalidate(Field::FullName);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.draft.email = value.into();
        self.revalidate(Field::Email);
    }

    pub fn set_company_name(&mut self, value: impl Into<String>) {
        self.draft.company_name = value.into();
        self.revalidate(Field::CompanyName);
    }

    /// Add the service to the selection if absent, remove it if present.
    pub fn toggle_service(&mut self, service: Service) {
        if !self.draft.services.remove(&service) {
            self.draft.services.insert(service);
        }
        self.revalidate(Field::Services);
    }

    /// Raw text input; empty stays empty and is reported as invalid,
    /// never coerced to zero.
    pub fn set_budget_usd(&mut self, raw: impl Into<String>) {
        self.draft.budget_usd = raw.into();
        self.revalidate(Field::BudgetUsd);
    }

    /// Raw ISO `YYYY-MM-DD` input.
    pub fn set_project_start_date(&mut self, raw: impl Into<String>) {
        self.draft.project_start_date = raw.into();
        self.revalidate(Field::ProjectStartDate);
    }

    pub fn set_accept_terms(&mut self, accepted: bool) {
        self.draft.accept_terms = accepted;
        self.revalidate(Field::AcceptTerms);
    }

    // -- Validation status reads ----------------------------------------

    /// The current error for one field, if any.
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field.name()).map(String::as_str)
    }

    /// All current per-field errors, keyed by wire field name.
    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// Whether the whole draft currently satisfies the constraint set.
    ///
    /// "Today" is recomputed on every call, so a draft that was valid
    /// yesterday with a start date of yesterday no longer is.
    pub fn is_valid(&self) -> bool {
        self.draft.finalize(Utc::now().date_naive()).is_ok()
    }

    /// Whether a submission request is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The notice from the last settled submit attempt, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Dismiss the current notice (e.g. after displaying it).
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    // -- Submit lifecycle ------------------------------------------------

    /// Validate all fields and, if clean, mark the form as submitting
    /// and hand back the record to send.
    ///
    /// On violations, every field error is recorded on the form and the
    /// attempt is blocked. A second call while a request is outstanding
    /// is also blocked.
    pub fn begin_submit(&mut self) -> Result<OnboardingSubmission, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }

        match self.draft.finalize(Utc::now().date_naive()) {
            Ok(record) => {
                self.errors.clear();
                self.notice = None;
                self.submitting = true;
                Ok(record)
            }
            Err(violations) => {
                self.errors = violations
                    .into_iter()
                    .map(|v| (v.field, v.message))
                    .collect();
                Err(SubmitBlocked::Invalid)
            }
        }
    }

    /// Settle the outstanding submit attempt.
    ///
    /// Success clears the draft for the next intake; failure preserves
    /// it so the user can retry without re-entering anything.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        match outcome {
            SubmitOutcome::Delivered(message) => {
                self.draft = SubmissionDraft::default();
                self.errors.clear();
                self.notice = Some(Notice::Success(message));
            }
            SubmitOutcome::Failed(message) => {
                self.notice = Some(Notice::Failure(message));
            }
        }
    }

    fn revalidate(&mut self, field: Field) {
        match check_draft_field(&self.draft, field, Utc::now().date_naive()) {
            Some(violation) => {
                self.errors.insert(violation.field, violation.message);
            }
            None => {
                self.errors.remove(field.name());
            }
        }
    }
}
