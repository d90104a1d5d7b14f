//! Foundation module - Shared domain primitives.
//!
//! Contains the category enumerations, the string-label normalization
//! machinery, and the error types that form the vocabulary of the
//! triage domain.

mod categories;
mod errors;

pub use categories::{
    Automatable, Category, Exploitation, Methodology, MissionWellbeingImpact, RawValue,
    SafetyImpact, TechnicalImpact, Utility,
};
pub use errors::EvaluationError;
