use crate::modules::activities::core::{policy::CapacityPolicy, state::ActivityState};
use crate::modules::activities::use_cases::sign_up::{
    command::SignUp,
    decision::{DecideError, Decision},
};

/// Admission check against a roster snapshot. Duplicates are rejected
/// before capacity, so re-signing a full activity still reports the
/// duplicate, not fullness.
pub fn decide_sign_up(state: &ActivityState, command: &SignUp, policy: CapacityPolicy) -> Decision {
    if state.is_registered(&command.email) {
        return Decision::Rejected {
            reason: DecideError::AlreadyRegistered,
        };
    }
    if policy == CapacityPolicy::Enforce && state.is_full() {
        return Decision::Rejected {
            reason: DecideError::ActivityFull,
        };
    }
    let mut roster = state.participants.clone();
    roster.push(command.email.clone());
    Decision::Accepted { roster }
}
