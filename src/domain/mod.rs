//! Domain layer containing the triage business logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (category enums, normalization, errors)
//! - `triage` - Decision construction, validation, and matrix evaluation

pub mod foundation;
pub mod triage;
