//! Client side of the onboarding intake: an explicit form state
//! container over the shared constraint set, and an HTTP submitter.
//!
//! There is no rendering here. A frontend owns widgets; this crate owns
//! the draft, its validation status, and the submit lifecycle, all
//! passed around explicitly rather than captured in framework context.

pub mod config;
pub mod form;
pub mod submit;
