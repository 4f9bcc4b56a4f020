use crate::modules::activities::adapters::outbound::directory::{
    ActivityDirectory, DirectoryError, LoadedActivity,
};
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

#[derive(Debug)]
struct VersionedActivity {
    state: ActivityState,
    version: u64,
}

/// In-memory implementation of the directory and queries ports. Seeded once
/// at startup; the roster check in `commit` runs under the write guard, so
/// a stale version can never overwrite a concurrent mutation.
#[derive(Default)]
pub struct InMemoryDirectory {
    inner: RwLock<HashMap<String, VersionedActivity>>,
    offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_activities(activities: impl IntoIterator<Item = ActivityState>) -> Self {
        let inner = activities
            .into_iter()
            .map(|state| {
                (
                    state.name.clone(),
                    VersionedActivity { state, version: 0 },
                )
            })
            .collect();
        Self {
            inner: RwLock::new(inner),
            offline: false,
        }
    }

    /// Simulates an unreachable backing store. Call before sharing the
    /// directory; every subsequent operation fails with `Backend`.
    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), DirectoryError> {
        if self.offline {
            return Err(DirectoryError::Backend(
                "Activity directory offline".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityDirectory for InMemoryDirectory {
    async fn load(&self, activity: &str) -> Result<LoadedActivity, DirectoryError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        let entry = guard
            .get(activity)
            .ok_or_else(|| DirectoryError::UnknownActivity {
                name: activity.to_string(),
            })?;
        Ok(LoadedActivity {
            state: entry.state.clone(),
            version: entry.version,
        })
    }

    async fn commit(
        &self,
        activity: &str,
        expected_version: u64,
        roster: Vec<String>,
    ) -> Result<(), DirectoryError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        let entry = guard
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::UnknownActivity {
                name: activity.to_string(),
            })?;
        if entry.version != expected_version {
            return Err(DirectoryError::VersionMismatch {
                expected: expected_version,
                actual: entry.version,
            });
        }
        entry.state.participants = roster;
        entry.version += 1;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryDirectory {
    async fn list_all(&self) -> anyhow::Result<BTreeMap<String, ActivityView>> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .values()
            .map(|entry| {
                (
                    entry.state.name.clone(),
                    ActivityView::from_state(&entry.state),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod in_memory_directory_tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn art_club() -> ActivityState {
        ActivityState {
            name: "Art Club".to_string(),
            description: "Express creativity through painting and drawing".to_string(),
            schedule: "Thursdays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 15,
            participants: vec!["amelia@mergington.edu".to_string()],
        }
    }

    #[fixture]
    fn directory() -> InMemoryDirectory {
        InMemoryDirectory::from_activities([art_club()])
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_a_seeded_activity_at_version_zero(directory: InMemoryDirectory) {
        let loaded = directory.load("Art Club").await.expect("load failed");
        assert_eq!(loaded.version, 0);
        assert_eq!(loaded.state, art_club());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_load_an_unknown_activity(directory: InMemoryDirectory) {
        let result = directory.load("Debate Team").await;
        assert_eq!(
            result.unwrap_err(),
            DirectoryError::UnknownActivity {
                name: "Debate Team".to_string()
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_commit_a_roster_and_bump_the_version(directory: InMemoryDirectory) {
        let roster = vec![
            "amelia@mergington.edu".to_string(),
            "lucas@mergington.edu".to_string(),
        ];
        directory
            .commit("Art Club", 0, roster.clone())
            .await
            .expect("commit failed");
        let loaded = directory.load("Art Club").await.expect("load failed");
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.state.participants, roster);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_commit_with_a_stale_version(directory: InMemoryDirectory) {
        directory
            .commit("Art Club", 0, Vec::new())
            .await
            .expect("first commit failed");
        let result = directory.commit("Art Club", 0, Vec::new()).await;
        assert_eq!(
            result.unwrap_err(),
            DirectoryError::VersionMismatch {
                expected: 0,
                actual: 1
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_commit_to_an_unknown_activity(directory: InMemoryDirectory) {
        let result = directory.commit("Debate Team", 0, Vec::new()).await;
        assert!(matches!(
            result,
            Err(DirectoryError::UnknownActivity { .. })
        ));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_all_activities_keyed_by_name(directory: InMemoryDirectory) {
        let all = directory.list_all().await.expect("list_all failed");
        assert_eq!(all.len(), 1);
        let view = all.get("Art Club").expect("Art Club missing");
        assert_eq!(view.participants, vec!["amelia@mergington.edu"]);
        assert_eq!(view.max_participants, 15);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_operation_while_offline() {
        let mut directory = InMemoryDirectory::from_activities([art_club()]);
        directory.toggle_offline();
        assert!(directory.load("Art Club").await.is_err());
        assert!(directory.commit("Art Club", 0, Vec::new()).await.is_err());
        assert!(
            directory
                .list_all()
                .await
                .unwrap_err()
                .to_string()
                .contains("Activity directory offline")
        );
    }
}
