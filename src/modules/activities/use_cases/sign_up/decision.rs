#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("Already signed up for this activity")]
    AlreadyRegistered,

    #[error("Activity is full")]
    ActivityFull,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted { roster: Vec<String> },
    Rejected { reason: DecideError },
}
