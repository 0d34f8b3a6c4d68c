//! Field and violation vocabulary for the constraint set.

use serde::Serialize;

/// The submission fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    CompanyName,
    Services,
    BudgetUsd,
    ProjectStartDate,
    AcceptTerms,
}

impl Field {
    /// Every submission field, in form order.
    pub const ALL: [Field; 7] = [
        Field::FullName,
        Field::Email,
        Field::CompanyName,
        Field::Services,
        Field::BudgetUsd,
        Field::ProjectStartDate,
        Field::AcceptTerms,
    ];

    /// Wire name of the field, matching the JSON body (camelCase).
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::Email => "email",
            Field::CompanyName => "companyName",
            Field::Services => "services",
            Field::BudgetUsd => "budgetUsd",
            Field::ProjectStartDate => "projectStartDate",
            Field::AcceptTerms => "acceptTerms",
        }
    }
}

/// Constraint identifiers carried in violations.
pub mod constraint {
    pub const REQUIRED: &str = "required";
    pub const LENGTH: &str = "length";
    pub const PATTERN: &str = "pattern";
    pub const EMAIL: &str = "email";
    pub const NON_EMPTY: &str = "non_empty";
    pub const INTEGER: &str = "integer";
    pub const RANGE: &str = "range";
    pub const DATE: &str = "date";
    pub const ACCEPTED: &str = "accepted";
}

/// A single field-level constraint violation.
///
/// A field reports at most one violation per evaluation: the first
/// unmet constraint in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Wire name of the violating field.
    pub field: &'static str,
    /// Which constraint was violated (see [`constraint`]).
    pub constraint: &'static str,
    /// Human-readable message for inline display.
    pub message: String,
}

impl FieldViolation {
    pub(crate) fn new(field: Field, constraint: &'static str, message: impl Into<String>) -> Self {
        Self {
            field: field.name(),
            constraint,
            message: message.into(),
        }
    }
}
