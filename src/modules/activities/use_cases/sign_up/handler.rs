use crate::modules::activities::adapters::outbound::directory::{ActivityDirectory, DirectoryError};
use crate::modules::activities::core::policy::CapacityPolicy;
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::modules::activities::use_cases::sign_up::decide::decide_sign_up;
use crate::modules::activities::use_cases::sign_up::decision::Decision;
use std::sync::Arc;
use thiserror::Error;

// Re-decide against fresh state this many times before giving up on a
// contended activity.
const COMMIT_ATTEMPTS: usize = 4;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

pub struct SignUpHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    directory: Arc<TDirectory>,
    capacity_policy: CapacityPolicy,
}

impl<TDirectory> SignUpHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    pub fn new(directory: Arc<TDirectory>, capacity_policy: CapacityPolicy) -> Self {
        Self {
            directory,
            capacity_policy,
        }
    }

    pub async fn handle(&self, command: SignUp) -> Result<(), ApplicationError> {
        for _ in 0..COMMIT_ATTEMPTS {
            let loaded = self.directory.load(&command.activity).await?;

            let roster = match decide_sign_up(&loaded.state, &command, self.capacity_policy) {
                Decision::Accepted { roster } => roster,
                Decision::Rejected { reason } => {
                    return Err(ApplicationError::Domain(reason.to_string()));
                }
            };

            match self
                .directory
                .commit(&command.activity, loaded.version, roster)
                .await
            {
                Ok(()) => {
                    tracing::info!(activity = %command.activity, email = %command.email, "signed up");
                    return Ok(());
                }
                // Lost the race for this version; reload and re-decide.
                Err(DirectoryError::VersionMismatch { .. }) => continue,
                Err(error) => return Err(error.into()),
            }
        }
        Err(ApplicationError::Unexpected(format!(
            "sign-up for {} kept conflicting",
            command.activity
        )))
    }
}
