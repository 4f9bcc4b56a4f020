use crate::modules::activities::core::state::ActivityState;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("activity not found: {name}")]
    UnknownActivity { name: String },

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: u64, actual: u64 },

    #[error("backend error: {0}")]
    Backend(String),
}

/// Snapshot of one activity plus the version its roster was read at.
#[derive(Debug, Clone)]
pub struct LoadedActivity {
    pub state: ActivityState,
    pub version: u64,
}

/// Keyed store of activity records. `commit` replaces the roster only if
/// the activity is still at `expected_version`, so callers can re-decide
/// against fresh state instead of losing concurrent updates.
#[async_trait]
pub trait ActivityDirectory: Send + Sync {
    async fn load(&self, activity: &str) -> Result<LoadedActivity, DirectoryError>;

    async fn commit(
        &self,
        activity: &str,
        expected_version: u64,
        roster: Vec<String>,
    ) -> Result<(), DirectoryError>;
}
