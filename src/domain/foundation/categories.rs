//! Category enumerations and string-label normalization.
//!
//! Every attribute of a triage decision is a member of a closed
//! enumeration whose canonical string label doubles as the wire format.
//! Callers may supply either a typed member or a raw label; raw labels
//! resolve by exact, case-sensitive match or not at all.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed categorical domain with fixed canonical labels.
pub trait Category: Copy + Eq + Sized + 'static {
    /// Name of the enumeration, used in validation messages.
    const NAME: &'static str;

    /// All members in canonical order.
    fn all() -> &'static [Self];

    /// The canonical wire label for this member.
    fn label(&self) -> &'static str;

    /// Resolves a raw label to a member.
    ///
    /// Exact, case-sensitive comparison against the canonical labels.
    /// No trimming, no fuzzy matching. Returns `None` for anything else;
    /// never panics.
    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|m| m.label() == label)
    }
}

/// A loosely-typed input value: either an already-typed category member
/// or a raw string label awaiting normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue<T> {
    Typed(T),
    Label(String),
}

impl<T: Category> RawValue<T> {
    /// Resolves this input to a category member, or `None` when the
    /// label matches nothing. Whether an absent member is an error is
    /// the evaluator's call, not the normalizer's.
    pub fn resolve(&self) -> Option<T> {
        match self {
            RawValue::Typed(value) => Some(*value),
            RawValue::Label(label) => T::from_label(label),
        }
    }
}

impl<T> From<&str> for RawValue<T> {
    fn from(label: &str) -> Self {
        RawValue::Label(label.to_string())
    }
}

impl<T> From<String> for RawValue<T> {
    fn from(label: String) -> Self {
        RawValue::Label(label)
    }
}

/// Implements `Category`, `Display`, and typed `RawValue` conversion
/// for a category enum from its variant/label table.
macro_rules! category {
    ($ty:ident, $name:literal, [$($variant:ident => $label:literal),+ $(,)?]) => {
        impl Category for $ty {
            const NAME: &'static str = $name;

            fn all() -> &'static [Self] {
                &[$($ty::$variant),+]
            }

            fn label(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl From<$ty> for RawValue<$ty> {
            fn from(value: $ty) -> Self {
                RawValue::Typed(value)
            }
        }
    };
}

/// Evidence of exploitation in the wild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exploitation {
    None,
    Poc,
    Active,
}

category!(Exploitation, "Exploitation", [
    None => "none",
    Poc => "poc",
    Active => "active",
]);

/// Whether exploitation can be scripted at scale (CISA only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Automatable {
    No,
    Yes,
}

category!(Automatable, "Automatable", [
    No => "no",
    Yes => "yes",
]);

/// Degree of control/effect exploitation yields on the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnicalImpact {
    Partial,
    Total,
}

category!(TechnicalImpact, "TechnicalImpact", [
    Partial => "partial",
    Total => "total",
]);

/// Consequence to the organization's mission or human wellbeing (CISA only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissionWellbeingImpact {
    Low,
    Medium,
    High,
}

category!(MissionWellbeingImpact, "MissionWellbeingImpact", [
    Low => "low",
    Medium => "medium",
    High => "high",
]);

/// Attacker-perceived value of exploiting the vulnerability (FIRST only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Utility {
    Laborious,
    Efficient,
    SuperEffective,
}

category!(Utility, "Utility", [
    Laborious => "laborious",
    Efficient => "efficient",
    SuperEffective => "super_effective",
]);

/// Severity of physical/safety consequence (FIRST only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyImpact {
    None,
    Minor,
    Major,
    Hazardous,
    Catastrophic,
}

category!(SafetyImpact, "SafetyImpact", [
    None => "none",
    Minor => "minor",
    Major => "major",
    Hazardous => "hazardous",
    Catastrophic => "catastrophic",
]);

/// Which triage methodology a decision is evaluated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Methodology {
    Cisa,
    First,
}

category!(Methodology, "Methodology", [
    Cisa => "CISA",
    First => "FIRST",
]);
