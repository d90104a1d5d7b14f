//! The triage `Decision`: construction, per-methodology validation,
//! and evaluation against the fixed decision matrices.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::foundation::{
    Automatable, EvaluationError, Exploitation, Methodology, MissionWellbeingImpact, RawValue,
    SafetyImpact, TechnicalImpact, Utility,
};
use crate::domain::triage::action::{Action, CisaAction, DecisionPriority, FirstAction};
use crate::domain::triage::matrix;

/// The result of a successful evaluation: the chosen action paired with
/// its derived priority. Immutable; owned by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub action: Action,
    pub priority: DecisionPriority,
}

impl Outcome {
    /// Wraps a CISA action, deriving its priority.
    pub fn cisa(action: CisaAction) -> Self {
        Self {
            action: Action::Cisa(action),
            priority: action.priority(),
        }
    }

    /// Wraps a FIRST action, deriving its priority.
    pub fn first(action: FirstAction) -> Self {
        Self {
            action: Action::First(action),
            priority: action.priority(),
        }
    }
}

/// Attributes specific to the resolved methodology.
///
/// A decision holds exactly the attribute pair its methodology requires;
/// the other methodology's pair does not exist on the variant at all, so
/// cross-population is impossible by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodologyAttributes {
    Cisa {
        automatable: Option<Automatable>,
        mission_wellbeing: Option<MissionWellbeingImpact>,
    },
    First {
        utility: Option<Utility>,
        safety_impact: Option<SafetyImpact>,
    },
    Unresolved,
}

/// A vulnerability triage decision, immutable after construction.
///
/// Built from loosely-typed input via [`Decision::builder`]; construction
/// never fails. Validation of required attributes happens in
/// [`Decision::evaluate`], which is pure and repeatable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    exploitation: Option<Exploitation>,
    technical_impact: Option<TechnicalImpact>,
    attributes: MethodologyAttributes,
}

impl Decision {
    /// Starts building a decision from raw attribute values.
    pub fn builder() -> DecisionBuilder {
        DecisionBuilder::default()
    }

    /// The resolved methodology, if the selector normalized.
    pub fn methodology(&self) -> Option<Methodology> {
        match self.attributes {
            MethodologyAttributes::Cisa { .. } => Some(Methodology::Cisa),
            MethodologyAttributes::First { .. } => Some(Methodology::First),
            MethodologyAttributes::Unresolved => None,
        }
    }

    pub fn exploitation(&self) -> Option<Exploitation> {
        self.exploitation
    }

    pub fn technical_impact(&self) -> Option<TechnicalImpact> {
        self.technical_impact
    }

    /// Resolved only for CISA decisions.
    pub fn automatable(&self) -> Option<Automatable> {
        match self.attributes {
            MethodologyAttributes::Cisa { automatable, .. } => automatable,
            _ => None,
        }
    }

    /// Resolved only for CISA decisions.
    pub fn mission_wellbeing(&self) -> Option<MissionWellbeingImpact> {
        match self.attributes {
            MethodologyAttributes::Cisa {
                mission_wellbeing, ..
            } => mission_wellbeing,
            _ => None,
        }
    }

    /// Resolved only for FIRST decisions.
    pub fn utility(&self) -> Option<Utility> {
        match self.attributes {
            MethodologyAttributes::First { utility, .. } => utility,
            _ => None,
        }
    }

    /// Resolved only for FIRST decisions.
    pub fn safety_impact(&self) -> Option<SafetyImpact> {
        match self.attributes {
            MethodologyAttributes::First { safety_impact, .. } => safety_impact,
            _ => None,
        }
    }

    /// Evaluates the decision against its methodology's matrix.
    ///
    /// Returns `Ok(None)` when the methodology never resolved; this is a
    /// soft failure, not an error. Otherwise validates the required
    /// attributes in the methodology's fixed order (first violation wins)
    /// and returns the outcome.
    pub fn evaluate(&self) -> Result<Option<Outcome>, EvaluationError> {
        let outcome = match self.attributes {
            MethodologyAttributes::Unresolved => return Ok(None),

            MethodologyAttributes::Cisa {
                automatable,
                mission_wellbeing,
            } => {
                let exploitation = self
                    .exploitation
                    .ok_or(EvaluationError::InvalidExploitation)?;
                let technical_impact = self
                    .technical_impact
                    .ok_or(EvaluationError::InvalidTechnicalImpact)?;
                let automatable = automatable.ok_or(EvaluationError::InvalidAutomatable)?;
                let mission_wellbeing =
                    mission_wellbeing.ok_or(EvaluationError::InvalidMissionWellbeing)?;

                Outcome::cisa(matrix::cisa_action(
                    exploitation,
                    automatable,
                    technical_impact,
                    mission_wellbeing,
                ))
            }

            MethodologyAttributes::First {
                utility,
                safety_impact,
            } => {
                let exploitation = self
                    .exploitation
                    .ok_or(EvaluationError::InvalidExploitation)?;
                let utility = utility.ok_or(EvaluationError::InvalidUtility)?;
                let technical_impact = self
                    .technical_impact
                    .ok_or(EvaluationError::InvalidTechnicalImpact)?;
                let safety_impact = safety_impact.ok_or(EvaluationError::InvalidSafetyImpact)?;

                Outcome::first(matrix::first_action(
                    exploitation,
                    utility,
                    technical_impact,
                    safety_impact,
                ))
            }
        };

        if let Some(methodology) = self.methodology() {
            debug!(
                methodology = %methodology,
                action = %outcome.action,
                priority = %outcome.priority,
                "triage decision evaluated"
            );
        }

        Ok(Some(outcome))
    }
}

/// Builder accepting each attribute as a typed category value or a raw
/// string label. `build` never fails; unresolved values stay absent.
#[derive(Debug, Clone, Default)]
pub struct DecisionBuilder {
    methodology: Option<RawValue<Methodology>>,
    exploitation: Option<RawValue<Exploitation>>,
    automatable: Option<RawValue<Automatable>>,
    technical_impact: Option<RawValue<TechnicalImpact>>,
    mission_wellbeing: Option<RawValue<MissionWellbeingImpact>>,
    utility: Option<RawValue<Utility>>,
    safety_impact: Option<RawValue<SafetyImpact>>,
}

impl DecisionBuilder {
    pub fn methodology(mut self, value: impl Into<RawValue<Methodology>>) -> Self {
        self.methodology = Some(value.into());
        self
    }

    pub fn exploitation(mut self, value: impl Into<RawValue<Exploitation>>) -> Self {
        self.exploitation = Some(value.into());
        self
    }

    pub fn automatable(mut self, value: impl Into<RawValue<Automatable>>) -> Self {
        self.automatable = Some(value.into());
        self
    }

    pub fn technical_impact(mut self, value: impl Into<RawValue<TechnicalImpact>>) -> Self {
        self.technical_impact = Some(value.into());
        self
    }

    pub fn mission_wellbeing(mut self, value: impl Into<RawValue<MissionWellbeingImpact>>) -> Self {
        self.mission_wellbeing = Some(value.into());
        self
    }

    pub fn utility(mut self, value: impl Into<RawValue<Utility>>) -> Self {
        self.utility = Some(value.into());
        self
    }

    pub fn safety_impact(mut self, value: impl Into<RawValue<SafetyImpact>>) -> Self {
        self.safety_impact = Some(value.into());
        self
    }

    /// Normalizes every supplied value and assembles the decision.
    ///
    /// The methodology resolves first; only the attribute pair belonging
    /// to the resolved methodology is normalized, and the other pair is
    /// left structurally absent even if raw values were supplied for it.
    pub fn build(self) -> Decision {
        let methodology = self.methodology.as_ref().and_then(RawValue::resolve);
        let exploitation = self.exploitation.as_ref().and_then(RawValue::resolve);
        let technical_impact = self.technical_impact.as_ref().and_then(RawValue::resolve);

        let attributes = match methodology {
            Some(Methodology::Cisa) => MethodologyAttributes::Cisa {
                automatable: self.automatable.as_ref().and_then(RawValue::resolve),
                mission_wellbeing: self.mission_wellbeing.as_ref().and_then(RawValue::resolve),
            },
            Some(Methodology::First) => MethodologyAttributes::First {
                utility: self.utility.as_ref().and_then(RawValue::resolve),
                safety_impact: self.safety_impact.as_ref().and_then(RawValue::resolve),
            },
            None => MethodologyAttributes::Unresolved,
        };

        Decision {
            exploitation,
            technical_impact,
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Category;
    use proptest::prelude::*;

    #[test]
    fn builder_accepts_typed_values_for_cisa() {
        let decision = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::Active)
            .automatable(Automatable::Yes)
            .technical_impact(TechnicalImpact::Total)
            .mission_wellbeing(MissionWellbeingImpact::High)
            .build();

        assert_eq!(decision.methodology(), Some(Methodology::Cisa));
        assert_eq!(decision.exploitation(), Some(Exploitation::Active));
        assert_eq!(decision.automatable(), Some(Automatable::Yes));
        assert_eq!(decision.technical_impact(), Some(TechnicalImpact::Total));
        assert_eq!(
            decision.mission_wellbeing(),
            Some(MissionWellbeingImpact::High)
        );
    }

    #[test]
    fn builder_accepts_raw_labels_for_cisa() {
        let decision = Decision::builder()
            .methodology("CISA")
            .exploitation("active")
            .automatable("yes")
            .technical_impact("total")
            .mission_wellbeing("high")
            .build();

        assert_eq!(decision.methodology(), Some(Methodology::Cisa));
        assert_eq!(decision.exploitation(), Some(Exploitation::Active));
        assert_eq!(decision.automatable(), Some(Automatable::Yes));
        assert_eq!(decision.technical_impact(), Some(TechnicalImpact::Total));
        assert_eq!(
            decision.mission_wellbeing(),
            Some(MissionWellbeingImpact::High)
        );
    }

    #[test]
    fn builder_accepts_raw_labels_for_first() {
        let decision = Decision::builder()
            .methodology("FIRST")
            .exploitation("poc")
            .utility("efficient")
            .technical_impact("partial")
            .safety_impact("major")
            .build();

        assert_eq!(decision.methodology(), Some(Methodology::First));
        assert_eq!(decision.exploitation(), Some(Exploitation::Poc));
        assert_eq!(decision.utility(), Some(Utility::Efficient));
        assert_eq!(decision.technical_impact(), Some(TechnicalImpact::Partial));
        assert_eq!(decision.safety_impact(), Some(SafetyImpact::Major));
    }

    #[test]
    fn invalid_labels_resolve_absent_without_error() {
        let decision = Decision::builder()
            .methodology("CISA")
            .exploitation("weaponized")
            .automatable("maybe")
            .technical_impact("total")
            .mission_wellbeing("high")
            .build();

        assert_eq!(decision.exploitation(), None);
        assert_eq!(decision.automatable(), None);
        assert_eq!(decision.technical_impact(), Some(TechnicalImpact::Total));
    }

    #[test]
    fn cisa_decision_ignores_first_only_fields() {
        let decision = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::Poc)
            .automatable(Automatable::No)
            .technical_impact(TechnicalImpact::Partial)
            .mission_wellbeing(MissionWellbeingImpact::High)
            .utility(Utility::SuperEffective)
            .safety_impact(SafetyImpact::Catastrophic)
            .build();

        assert_eq!(decision.utility(), None);
        assert_eq!(decision.safety_impact(), None);
        assert_eq!(decision.automatable(), Some(Automatable::No));
        assert_eq!(
            decision.mission_wellbeing(),
            Some(MissionWellbeingImpact::High)
        );
    }

    #[test]
    fn first_decision_ignores_cisa_only_fields() {
        let decision = Decision::builder()
            .methodology(Methodology::First)
            .exploitation(Exploitation::Poc)
            .automatable(Automatable::Yes)
            .technical_impact(TechnicalImpact::Partial)
            .mission_wellbeing(MissionWellbeingImpact::High)
            .utility(Utility::Laborious)
            .safety_impact(SafetyImpact::Minor)
            .build();

        assert_eq!(decision.automatable(), None);
        assert_eq!(decision.mission_wellbeing(), None);
        assert_eq!(decision.utility(), Some(Utility::Laborious));
        assert_eq!(decision.safety_impact(), Some(SafetyImpact::Minor));
    }

    #[test]
    fn unresolved_methodology_evaluates_to_empty_result() {
        let unset = Decision::builder()
            .exploitation(Exploitation::Active)
            .technical_impact(TechnicalImpact::Total)
            .build();
        assert_eq!(unset.evaluate(), Ok(None));

        let unrecognized = Decision::builder()
            .methodology("NIST")
            .exploitation(Exploitation::Active)
            .technical_impact(TechnicalImpact::Total)
            .build();
        assert_eq!(unrecognized.methodology(), None);
        assert_eq!(unrecognized.evaluate(), Ok(None));
    }

    #[test]
    fn cisa_high_severity_case_resolves_to_act() {
        let outcome = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::Active)
            .automatable(Automatable::Yes)
            .technical_impact(TechnicalImpact::Total)
            .mission_wellbeing(MissionWellbeingImpact::High)
            .build()
            .evaluate()
            .unwrap()
            .unwrap();

        assert_eq!(outcome.action, Action::Cisa(CisaAction::Act));
        assert_eq!(outcome.priority, DecisionPriority::Immediate);
    }

    #[test]
    fn cisa_medium_severity_case_resolves_to_track_star() {
        let outcome = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::Poc)
            .automatable(Automatable::No)
            .technical_impact(TechnicalImpact::Partial)
            .mission_wellbeing(MissionWellbeingImpact::High)
            .build()
            .evaluate()
            .unwrap()
            .unwrap();

        assert_eq!(outcome.action, Action::Cisa(CisaAction::TrackStar));
        assert_eq!(outcome.priority, DecisionPriority::Medium);
    }

    #[test]
    fn cisa_unlisted_combination_falls_back_to_track() {
        let outcome = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::None)
            .automatable(Automatable::No)
            .technical_impact(TechnicalImpact::Partial)
            .mission_wellbeing(MissionWellbeingImpact::Low)
            .build()
            .evaluate()
            .unwrap()
            .unwrap();

        assert_eq!(outcome.action, Action::Cisa(CisaAction::Track));
        assert_eq!(outcome.priority, DecisionPriority::Low);
    }

    #[test]
    fn first_worst_case_resolves_to_immediate() {
        let outcome = Decision::builder()
            .methodology(Methodology::First)
            .exploitation(Exploitation::Active)
            .utility(Utility::SuperEffective)
            .technical_impact(TechnicalImpact::Total)
            .safety_impact(SafetyImpact::Catastrophic)
            .build()
            .evaluate()
            .unwrap()
            .unwrap();

        assert_eq!(outcome.action, Action::First(FirstAction::Immediate));
        assert_eq!(outcome.priority, DecisionPriority::Immediate);
    }

    #[test]
    fn first_best_case_resolves_to_scheduled() {
        let outcome = Decision::builder()
            .methodology(Methodology::First)
            .exploitation(Exploitation::None)
            .utility(Utility::Laborious)
            .technical_impact(TechnicalImpact::Partial)
            .safety_impact(SafetyImpact::None)
            .build()
            .evaluate()
            .unwrap()
            .unwrap();

        assert_eq!(outcome.action, Action::First(FirstAction::Scheduled));
        assert_eq!(outcome.priority, DecisionPriority::Low);
    }

    #[test]
    fn first_middle_case_resolves_to_out_of_band() {
        let outcome = Decision::builder()
            .methodology(Methodology::First)
            .exploitation(Exploitation::Poc)
            .utility(Utility::Efficient)
            .technical_impact(TechnicalImpact::Partial)
            .safety_impact(SafetyImpact::Major)
            .build()
            .evaluate()
            .unwrap()
            .unwrap();

        assert_eq!(outcome.action, Action::First(FirstAction::OutOfBand));
        assert_eq!(outcome.priority, DecisionPriority::Medium);
    }

    #[test]
    fn cisa_missing_automatable_raises_invalid_automatable() {
        let result = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::Active)
            .technical_impact(TechnicalImpact::Total)
            .mission_wellbeing(MissionWellbeingImpact::High)
            .build()
            .evaluate();

        assert_eq!(result, Err(EvaluationError::InvalidAutomatable));
    }

    #[test]
    fn cisa_validation_short_circuits_in_field_order() {
        // Everything missing: exploitation is checked first.
        let result = Decision::builder()
            .methodology(Methodology::Cisa)
            .build()
            .evaluate();
        assert_eq!(result, Err(EvaluationError::InvalidExploitation));

        // Exploitation present: technical_impact is next.
        let result = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::Poc)
            .build()
            .evaluate();
        assert_eq!(result, Err(EvaluationError::InvalidTechnicalImpact));

        // Automatable precedes mission_wellbeing.
        let result = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::Poc)
            .technical_impact(TechnicalImpact::Total)
            .build()
            .evaluate();
        assert_eq!(result, Err(EvaluationError::InvalidAutomatable));

        let result = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::Poc)
            .technical_impact(TechnicalImpact::Total)
            .automatable(Automatable::Yes)
            .build()
            .evaluate();
        assert_eq!(result, Err(EvaluationError::InvalidMissionWellbeing));
    }

    #[test]
    fn first_validation_checks_utility_before_technical_impact() {
        let result = Decision::builder()
            .methodology(Methodology::First)
            .exploitation(Exploitation::Poc)
            .build()
            .evaluate();
        assert_eq!(result, Err(EvaluationError::InvalidUtility));

        let result = Decision::builder()
            .methodology(Methodology::First)
            .exploitation(Exploitation::Poc)
            .utility(Utility::Efficient)
            .build()
            .evaluate();
        assert_eq!(result, Err(EvaluationError::InvalidTechnicalImpact));

        let result = Decision::builder()
            .methodology(Methodology::First)
            .exploitation(Exploitation::Poc)
            .utility(Utility::Efficient)
            .technical_impact(TechnicalImpact::Total)
            .build()
            .evaluate();
        assert_eq!(result, Err(EvaluationError::InvalidSafetyImpact));
    }

    #[test]
    fn first_invalid_label_raises_like_missing_field() {
        let result = Decision::builder()
            .methodology("FIRST")
            .exploitation("active")
            .utility("super effective")
            .technical_impact("total")
            .safety_impact("catastrophic")
            .build()
            .evaluate();

        assert_eq!(result, Err(EvaluationError::InvalidUtility));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let decision = Decision::builder()
            .methodology(Methodology::Cisa)
            .exploitation(Exploitation::Active)
            .automatable(Automatable::Yes)
            .technical_impact(TechnicalImpact::Partial)
            .mission_wellbeing(MissionWellbeingImpact::Medium)
            .build();

        let first_run = decision.evaluate().unwrap();
        let second_run = decision.evaluate().unwrap();
        assert_eq!(first_run, second_run);
        assert_eq!(
            first_run.unwrap().action,
            Action::Cisa(CisaAction::Attend)
        );
    }

    #[test]
    fn outcome_serializes_action_and_priority_labels() {
        let outcome = Outcome::cisa(CisaAction::TrackStar);
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            "{\"action\":\"Track*\",\"priority\":\"medium\"}"
        );

        let outcome = Outcome::first(FirstAction::OutOfBand);
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            "{\"action\":\"out-of-band\",\"priority\":\"medium\"}"
        );
    }

    proptest! {
        #[test]
        fn arbitrary_labels_never_panic_and_only_canonical_ones_resolve(label in ".*") {
            let decision = Decision::builder()
                .methodology(label.as_str())
                .exploitation(label.as_str())
                .automatable(label.as_str())
                .technical_impact(label.as_str())
                .mission_wellbeing(label.as_str())
                .utility(label.as_str())
                .safety_impact(label.as_str())
                .build();

            if decision.methodology().is_none() {
                prop_assert_eq!(decision.evaluate(), Ok(None));
            }
            if let Some(exploitation) = decision.exploitation() {
                prop_assert_eq!(exploitation.label(), label.as_str());
            }
        }

        #[test]
        fn every_fully_valid_cisa_tuple_produces_an_outcome(
            e in 0usize..3, a in 0usize..2, t in 0usize..2, m in 0usize..3
        ) {
            let decision = Decision::builder()
                .methodology(Methodology::Cisa)
                .exploitation(Exploitation::all()[e])
                .automatable(Automatable::all()[a])
                .technical_impact(TechnicalImpact::all()[t])
                .mission_wellbeing(MissionWellbeingImpact::all()[m])
                .build();

            let outcome = decision.evaluate().unwrap().unwrap();
            prop_assert_eq!(outcome.priority, outcome.action.priority());
        }

        #[test]
        fn every_fully_valid_first_tuple_produces_an_outcome(
            e in 0usize..3, u in 0usize..3, t in 0usize..2, s in 0usize..5
        ) {
            let decision = Decision::builder()
                .methodology(Methodology::First)
                .exploitation(Exploitation::all()[e])
                .utility(Utility::all()[u])
                .technical_impact(TechnicalImpact::all()[t])
                .safety_impact(SafetyImpact::all()[s])
                .build();

            let outcome = decision.evaluate().unwrap().unwrap();
            prop_assert_eq!(outcome.priority, outcome.action.priority());
        }
    }
}
