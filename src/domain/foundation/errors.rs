//! Error types for the triage domain.

use thiserror::Error;

/// Precondition violations raised by `Decision::evaluate`.
///
/// Each variant names the required attribute that was absent or failed to
/// normalize for the active methodology. Construction never raises; these
/// surface only at evaluation time, and validation short-circuits so the
/// first violated precondition wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("exploitation must be a valid Exploitation value")]
    InvalidExploitation,

    #[error("automatable must be a valid Automatable value")]
    InvalidAutomatable,

    #[error("technical_impact must be a valid TechnicalImpact value")]
    InvalidTechnicalImpact,

    #[error("mission_wellbeing must be a valid MissionWellbeingImpact value")]
    InvalidMissionWellbeing,

    #[error("utility must be a valid Utility value")]
    InvalidUtility,

    #[error("safety_impact must be a valid SafetyImpact value")]
    InvalidSafetyImpact,
}
