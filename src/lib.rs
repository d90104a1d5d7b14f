//! Vuln Triage - Vulnerability Prioritization Decision Engine
//!
//! Implements two published triage methodologies - the CISA
//! stakeholder-specific scheme and the FIRST scheme - mapping a small set
//! of categorical vulnerability attributes to a recommended remediation
//! action and its priority.
//!
//! The engine is a pure, synchronous classification function: no I/O, no
//! shared mutable state, no persistence. Decisions are built from
//! loosely-typed input (typed categories or raw string labels), validated
//! per methodology at evaluation time, and looked up in fixed decision
//! matrices.
//!
//! ```
//! use vuln_triage::{Decision, DecisionPriority};
//!
//! let outcome = Decision::builder()
//!     .methodology("CISA")
//!     .exploitation("active")
//!     .automatable("yes")
//!     .technical_impact("total")
//!     .mission_wellbeing("high")
//!     .build()
//!     .evaluate()
//!     .expect("all required attributes supplied")
//!     .expect("methodology resolved");
//!
//! assert_eq!(outcome.action.label(), "Act");
//! assert_eq!(outcome.priority, DecisionPriority::Immediate);
//! ```

pub mod domain;

pub use domain::foundation::{
    Automatable, Category, EvaluationError, Exploitation, Methodology, MissionWellbeingImpact,
    RawValue, SafetyImpact, TechnicalImpact, Utility,
};
pub use domain::triage::{
    Action, CisaAction, Decision, DecisionBuilder, DecisionPriority, FirstAction, Outcome,
};
