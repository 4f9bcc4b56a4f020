use crate::modules::activities::adapters::outbound::directory::{ActivityDirectory, DirectoryError};
use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::modules::activities::use_cases::unregister::decide::decide_unregister;
use crate::modules::activities::use_cases::unregister::decision::Decision;
use std::sync::Arc;
use thiserror::Error;

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

pub struct UnregisterHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> UnregisterHandler<TDirectory>
where
    TDirectory: ActivityDirectory + Send + Sync + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(&self, command: Unregister) -> Result<(), ApplicationError> {
        for _ in 0..COMMIT_ATTEMPTS {
            let loaded = self.directory.load(&command.activity).await?;

            let roster = match decide_unregister(&loaded.state, &command) {
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
                    tracing::info!(activity = %command.activity, email = %command.email, "unregistered");
                    return Ok(());
                }
                Err(DirectoryError::VersionMismatch { .. }) => continue,
                Err(error) => return Err(error.into()),
            }
        }
        Err(ApplicationError::Unexpected(format!(
            "unregister for {} kept conflicting",
            command.activity
        )))
    }
}
