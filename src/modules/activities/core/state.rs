/// One extracurricular offering. The name doubles as the directory key and
/// never changes after seeding; only the roster mutates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityState {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl ActivityState {
    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}
