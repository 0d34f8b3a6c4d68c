//! Pure constraint checks. No I/O, no clock access.
//!
//! The `_raw` variants take untouched text input from a draft; the
//! typed variants take already-deserialized values. Date checks compare
//! by calendar day against a caller-supplied `today`.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::rules::{constraint, Field, FieldViolation};
use crate::submission::{OnboardingSubmission, SubmissionDraft};

/// Full name bounds (characters).
pub const FULL_NAME_MIN: usize = 2;
pub const FULL_NAME_MAX: usize = 80;

/// Company name bounds (characters).
pub const COMPANY_NAME_MIN: usize = 2;
pub const COMPANY_NAME_MAX: usize = 100;

/// Budget bounds (whole US dollars).
pub const BUDGET_MIN: i64 = 100;
pub const BUDGET_MAX: i64 = 1_000_000;

/// Letters, spaces, apostrophes and hyphens only.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s'-]+$").expect("valid regex"));

/// One `@` separating non-empty local and domain parts, with a dotted
/// domain. Deliberately loose; the address is never mailed by this
/// system.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

pub fn check_full_name(value: &str) -> Option<FieldViolation> {
    let len = value.chars().count();
    if !(FULL_NAME_MIN..=FULL_NAME_MAX).contains(&len) {
        return Some(FieldViolation::new(
            Field::FullName,
            constraint::LENGTH,
            format!("Full name must be {FULL_NAME_MIN}-{FULL_NAME_MAX} characters"),
        ));
    }
    if !NAME_PATTERN.is_match(value) {
        return Some(FieldViolation::new(
            Field::FullName,
            constraint::PATTERN,
            "Full name may only contain letters, spaces, apostrophes and hyphens",
        ));
    }
    None
}

pub fn check_email(value: &str) -> Option<FieldViolation> {
    if EMAIL_PATTERN.is_match(value) {
        None
    } else {
        Some(FieldViolation::new(
            Field::Email,
            constraint::EMAIL,
            "Enter a valid email address",
        ))
    }
}

pub fn check_company_name(value: &str) -> Option<FieldViolation> {
    let len = value.chars().count();
    if (COMPANY_NAME_MIN..=COMPANY_NAME_MAX).contains(&len) {
        None
    } else {
        Some(FieldViolation::new(
            Field::CompanyName,
            constraint::LENGTH,
            format!("Company name must be {COMPANY_NAME_MIN}-{COMPANY_NAME_MAX} characters"),
        ))
    }
}

/// `selected` is the number of services currently chosen.
pub fn check_services(selected: usize) -> Option<FieldViolation> {
    if selected == 0 {
        Some(FieldViolation::new(
            Field::Services,
            constraint::NON_EMPTY,
            "Select at least one service",
        ))
    } else {
        None
    }
}

/// Check raw budget input: empty is invalid (never coerced to zero),
/// non-integer and out-of-range inputs fail with distinct constraints.
pub fn check_budget_raw(raw: &str) -> Result<i64, FieldViolation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldViolation::new(
            Field::BudgetUsd,
            constraint::REQUIRED,
            "Budget is required",
        ));
    }
    let value: i64 = raw.parse().map_err(|_| {
        FieldViolation::new(
            Field::BudgetUsd,
            constraint::INTEGER,
            "Budget must be a whole number",
        )
    })?;
    match check_budget(value) {
        Some(violation) => Err(violation),
        None => Ok(value),
    }
}

pub fn check_budget(value: i64) -> Option<FieldViolation> {
    if (BUDGET_MIN..=BUDGET_MAX).contains(&value) {
        None
    } else {
        Some(FieldViolation::new(
            Field::BudgetUsd,
            constraint::RANGE,
            format!("Budget must be between {BUDGET_MIN} and {BUDGET_MAX} USD"),
        ))
    }
}

/// Check raw date input (ISO `YYYY-MM-DD`).
pub fn check_start_date_raw(raw: &str, today: NaiveDate) -> Result<NaiveDate, FieldViolation> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FieldViolation::new(
            Field::ProjectStartDate,
            constraint::REQUIRED,
            "Project start date is required",
        ));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        FieldViolation::new(
            Field::ProjectStartDate,
            constraint::DATE,
            "Enter a date as YYYY-MM-DD",
        )
    })?;
    match check_start_date(date, today) {
        Some(violation) => Err(violation),
        None => Ok(date),
    }
}

/// Calendar-day comparison; neither side carries a time component.
pub fn check_start_date(date: NaiveDate, today: NaiveDate) -> Option<FieldViolation> {
    if date < today {
        Some(FieldViolation::new(
            Field::ProjectStartDate,
            constraint::DATE,
            "Project start date must be today or later",
        ))
    } else {
        None
    }
}

pub fn check_accept_terms(accepted: bool) -> Option<FieldViolation> {
    if accepted {
        None
    } else {
        Some(FieldViolation::new(
            Field::AcceptTerms,
            constraint::ACCEPTED,
            "You must accept the terms",
        ))
    }
}

/// Check a single draft field.
///
/// Used by the form to re-validate only the field the user just
/// touched.
pub fn check_draft_field(
    draft: &SubmissionDraft,
    field: Field,
    today: NaiveDate,
) -> Option<FieldViolation> {
    match field {
        Field::FullName => check_full_name(&draft.full_name),
        Field::Email => check_email(&draft.email),
        Field::CompanyName => check_company_name(&draft.company_name),
        Field::Services => check_services(draft.services.len()),
        Field::BudgetUsd => check_budget_raw(&draft.budget_usd).err(),
        Field::ProjectStartDate => check_start_date_raw(&draft.project_start_date, today).err(),
        Field::AcceptTerms => check_accept_terms(draft.accept_terms),
    }
}

/// Check a fully typed record against the whole constraint set.
///
/// Used by the service at the trust boundary. Every field is evaluated;
/// the result collects one violation per violating field.
pub fn check_submission(
    submission: &OnboardingSubmission,
    today: NaiveDate,
) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    let checks = [
        check_full_name(&submission.full_name),
        check_email(&submission.email),
        check_company_name(&submission.company_name),
        check_services(submission.services.len()),
        check_budget(submission.budget_usd),
        check_start_date(submission.project_start_date, today),
        check_accept_terms(submission.accept_terms),
    ];
    for violation in checks.into_iter().flatten() {
        violations.push(violation);
    }

    violations
}
