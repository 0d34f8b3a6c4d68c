//! The statically defined constraint set for onboarding submissions.
//!
//! Split in the usual two halves: [`rules`] carries the field and
//! violation vocabulary, [`checks`] the pure evaluation functions. The
//! same set runs on both sides of the wire -- in the form before any
//! network call, and in the service at the trust boundary.

pub mod checks;
pub mod rules;

pub use checks::{
    check_accept_terms, check_budget, check_budget_raw, check_company_name, check_draft_field,
    check_email, check_full_name, check_services, check_start_date, check_start_date_raw,
    check_submission,
};
pub use rules::{constraint, Field, FieldViolation};
