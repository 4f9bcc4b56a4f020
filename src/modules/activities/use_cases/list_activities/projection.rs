use crate::modules::activities::core::state::ActivityState;
use serde::Serialize;

/// Read model for one activity as returned by the listing endpoint. The
/// activity name is the key of the surrounding response object, not a field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl ActivityView {
    pub fn from_state(state: &ActivityState) -> Self {
        Self {
            description: state.description.clone(),
            schedule: state.schedule.clone(),
            max_participants: state.max_participants,
            participants: state.participants.clone(),
        }
    }
}
