//! Fixed decision matrices for the CISA and FIRST methodologies.
//!
//! Both tables are constant data expressed as `match` lookups. The CISA
//! table is sparse: combinations the published scheme leaves unlisted
//! fall through to `Track`. The FIRST table is dense (90 entries) and
//! the `match` is exhaustive, so no fallback arm exists to trigger.

use crate::domain::foundation::{
    Automatable, Exploitation, MissionWellbeingImpact, SafetyImpact, TechnicalImpact, Utility,
};
use crate::domain::triage::action::{CisaAction, FirstAction};

/// CISA action lookup keyed by
/// (Exploitation, Automatable, TechnicalImpact, MissionWellbeingImpact).
///
/// Unlisted combinations resolve to `Track`, the lowest-severity action.
/// That is the scheme's documented default, not an error.
pub(crate) fn cisa_action(
    exploitation: Exploitation,
    automatable: Automatable,
    technical_impact: TechnicalImpact,
    mission_wellbeing: MissionWellbeingImpact,
) -> CisaAction {
    use Automatable as A;
    use CisaAction::{Act, Attend, Track, TrackStar};
    use Exploitation as E;
    use MissionWellbeingImpact as M;
    use TechnicalImpact as T;

    match (exploitation, automatable, technical_impact, mission_wellbeing) {
        (E::None, A::Yes, T::Total, M::High) => Attend,
        (E::None, A::No, T::Total, M::High) => TrackStar,

        (E::Poc, A::Yes, T::Total, M::Medium) => TrackStar,
        (E::Poc, A::Yes, T::Total, M::High) => Attend,
        (E::Poc, A::Yes, T::Partial, M::High) => Attend,
        (E::Poc, A::No, T::Partial, M::High) => TrackStar,
        (E::Poc, A::No, T::Total, M::Medium) => TrackStar,
        (E::Poc, A::No, T::Total, M::High) => Attend,

        (E::Active, A::Yes, T::Partial, M::Low | M::Medium) => Attend,
        (E::Active, A::Yes, T::Partial, M::High) => Act,
        (E::Active, A::Yes, T::Total, M::Low) => Attend,
        (E::Active, A::Yes, T::Total, M::Medium | M::High) => Act,
        (E::Active, A::No, T::Partial, M::High) => Attend,
        (E::Active, A::No, T::Total, M::Medium) => Attend,
        (E::Active, A::No, T::Total, M::High) => Act,

        _ => Track,
    }
}

/// FIRST action lookup keyed by
/// (Exploitation, Utility, TechnicalImpact, SafetyImpact).
///
/// Dense table covering all 3 x 3 x 2 x 5 combinations; the match is
/// exhaustive and monotonic in severity along every axis.
pub(crate) fn first_action(
    exploitation: Exploitation,
    utility: Utility,
    technical_impact: TechnicalImpact,
    safety_impact: SafetyImpact,
) -> FirstAction {
    use Exploitation as E;
    use FirstAction::{Immediate, OutOfBand, Scheduled};
    use SafetyImpact as S;
    use TechnicalImpact as T;
    use Utility as U;

    match (exploitation, utility, technical_impact, safety_impact) {
        // Exploitation: none
        (E::None, U::Laborious, T::Partial, S::None | S::Minor | S::Major | S::Hazardous) => {
            Scheduled
        }
        (E::None, U::Laborious, T::Partial, S::Catastrophic) => OutOfBand,
        (E::None, U::Laborious, T::Total, S::None | S::Minor | S::Major) => Scheduled,
        (E::None, U::Laborious, T::Total, S::Hazardous | S::Catastrophic) => OutOfBand,
        (E::None, U::Efficient, T::Partial, S::None | S::Minor | S::Major) => Scheduled,
        (E::None, U::Efficient, T::Partial, S::Hazardous | S::Catastrophic) => OutOfBand,
        (E::None, U::Efficient, T::Total, S::None | S::Minor) => Scheduled,
        (E::None, U::Efficient, T::Total, S::Major | S::Hazardous) => OutOfBand,
        (E::None, U::Efficient, T::Total, S::Catastrophic) => Immediate,
        (E::None, U::SuperEffective, T::Partial, S::None | S::Minor) => Scheduled,
        (E::None, U::SuperEffective, T::Partial, S::Major | S::Hazardous) => OutOfBand,
        (E::None, U::SuperEffective, T::Partial, S::Catastrophic) => Immediate,
        (E::None, U::SuperEffective, T::Total, S::None | S::Minor) => Scheduled,
        (E::None, U::SuperEffective, T::Total, S::Major | S::Hazardous) => OutOfBand,
        (E::None, U::SuperEffective, T::Total, S::Catastrophic) => Immediate,

        // Exploitation: poc
        (E::Poc, U::Laborious, T::Partial, S::None | S::Minor) => Scheduled,
        (E::Poc, U::Laborious, T::Partial, S::Major | S::Hazardous | S::Catastrophic) => OutOfBand,
        (E::Poc, U::Laborious, T::Total, S::None | S::Minor) => Scheduled,
        (E::Poc, U::Laborious, T::Total, S::Major | S::Hazardous) => OutOfBand,
        (E::Poc, U::Laborious, T::Total, S::Catastrophic) => Immediate,
        (E::Poc, U::Efficient, T::Partial, S::None | S::Minor) => Scheduled,
        (E::Poc, U::Efficient, T::Partial, S::Major) => OutOfBand,
        (E::Poc, U::Efficient, T::Partial, S::Hazardous | S::Catastrophic) => Immediate,
        (E::Poc, U::Efficient, T::Total, S::None | S::Minor) => Scheduled,
        (E::Poc, U::Efficient, T::Total, S::Major) => OutOfBand,
        (E::Poc, U::Efficient, T::Total, S::Hazardous | S::Catastrophic) => Immediate,
        (E::Poc, U::SuperEffective, T::Partial, S::None | S::Minor) => Scheduled,
        (E::Poc, U::SuperEffective, T::Partial, S::Major) => OutOfBand,
        (E::Poc, U::SuperEffective, T::Partial, S::Hazardous | S::Catastrophic) => Immediate,
        (E::Poc, U::SuperEffective, T::Total, S::None) => Scheduled,
        (E::Poc, U::SuperEffective, T::Total, S::Minor | S::Major) => OutOfBand,
        (E::Poc, U::SuperEffective, T::Total, S::Hazardous | S::Catastrophic) => Immediate,

        // Exploitation: active
        (E::Active, U::Laborious, T::Partial, S::None | S::Minor) => OutOfBand,
        (E::Active, U::Laborious, T::Partial, S::Major | S::Hazardous | S::Catastrophic) => {
            Immediate
        }
        (E::Active, U::Laborious, T::Total, S::None) => OutOfBand,
        (E::Active, U::Laborious, T::Total, _) => Immediate,
        (E::Active, U::Efficient, T::Partial, S::None) => OutOfBand,
        (E::Active, U::Efficient, T::Partial, _) => Immediate,
        (E::Active, U::Efficient, T::Total, _) => Immediate,
        (E::Active, U::SuperEffective, _, _) => Immediate,
    }
}
