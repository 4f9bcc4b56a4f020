use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::unregister::{
    command::Unregister,
    decision::{DecideError, Decision},
};

/// Removal check against a roster snapshot. The remaining participants keep
/// their relative order.
pub fn decide_unregister(state: &ActivityState, command: &Unregister) -> Decision {
    if !state.is_registered(&command.email) {
        return Decision::Rejected {
            reason: DecideError::NotRegistered,
        };
    }
    let roster = state
        .participants
        .iter()
        .filter(|p| *p != &command.email)
        .cloned()
        .collect();
    Decision::Accepted { roster }
}
