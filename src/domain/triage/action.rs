//! Remediation actions and the action-to-priority derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommended remediation action under the CISA methodology,
/// ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CisaAction {
    #[serde(rename = "Track")]
    Track,
    #[serde(rename = "Track*")]
    TrackStar,
    #[serde(rename = "Attend")]
    Attend,
    #[serde(rename = "Act")]
    Act,
}

impl CisaAction {
    /// All actions in ascending severity order.
    pub fn all() -> &'static [CisaAction] {
        &[
            CisaAction::Track,
            CisaAction::TrackStar,
            CisaAction::Attend,
            CisaAction::Act,
        ]
    }

    /// The canonical wire label.
    pub fn label(&self) -> &'static str {
        match self {
            CisaAction::Track => "Track",
            CisaAction::TrackStar => "Track*",
            CisaAction::Attend => "Attend",
            CisaAction::Act => "Act",
        }
    }

    /// Derives the remediation priority for this action.
    pub fn priority(&self) -> DecisionPriority {
        match self {
            CisaAction::Track => DecisionPriority::Low,
            CisaAction::TrackStar => DecisionPriority::Medium,
            CisaAction::Attend => DecisionPriority::Medium,
            CisaAction::Act => DecisionPriority::Immediate,
        }
    }
}

impl fmt::Display for CisaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Recommended remediation action under the FIRST methodology,
/// ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstAction {
    Scheduled,
    #[serde(rename = "out-of-band")]
    OutOfBand,
    Immediate,
}

impl FirstAction {
    /// All actions in ascending severity order.
    pub fn all() -> &'static [FirstAction] {
        &[
            FirstAction::Scheduled,
            FirstAction::OutOfBand,
            FirstAction::Immediate,
        ]
    }

    /// The canonical wire label.
    pub fn label(&self) -> &'static str {
        match self {
            FirstAction::Scheduled => "scheduled",
            FirstAction::OutOfBand => "out-of-band",
            FirstAction::Immediate => "immediate",
        }
    }

    /// Derives the remediation priority for this action.
    pub fn priority(&self) -> DecisionPriority {
        match self {
            FirstAction::Scheduled => DecisionPriority::Low,
            FirstAction::OutOfBand => DecisionPriority::Medium,
            FirstAction::Immediate => DecisionPriority::Immediate,
        }
    }
}

impl fmt::Display for FirstAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Cross-methodology urgency rank derived from the chosen action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionPriority {
    Low,
    Medium,
    High,
    Immediate,
}

impl DecisionPriority {
    /// The canonical wire label.
    pub fn label(&self) -> &'static str {
        match self {
            DecisionPriority::Low => "low",
            DecisionPriority::Medium => "medium",
            DecisionPriority::High => "high",
            DecisionPriority::Immediate => "immediate",
        }
    }
}

impl fmt::Display for DecisionPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A chosen remediation action, tagged by methodology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Action {
    Cisa(CisaAction),
    First(FirstAction),
}

impl Action {
    /// Derives the remediation priority. Total over both action domains.
    pub fn priority(&self) -> DecisionPriority {
        match self {
            Action::Cisa(action) => action.priority(),
            Action::First(action) => action.priority(),
        }
    }

    /// The canonical wire label of the underlying action.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Cisa(action) => action.label(),
            Action::First(action) => action.label(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
