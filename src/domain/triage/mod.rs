//! Triage module - the decision evaluator.
//!
//! - `action` - methodology-specific actions and priority derivation
//! - `matrix` - the fixed CISA and FIRST decision tables
//! - `decision` - the `Decision` entity, builder, and evaluation

mod action;
mod decision;
mod matrix;

pub use action::{Action, CisaAction, DecisionPriority, FirstAction};
pub use decision::{Decision, DecisionBuilder, Outcome};
