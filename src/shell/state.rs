use crate::modules::activities::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::activities::core::policy::CapacityPolicy;
use crate::modules::activities::core::state::ActivityState;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up::handler::SignUpHandler;
use crate::modules::activities::use_cases::unregister::handler::UnregisterHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpHandler<InMemoryDirectory>>,
    pub unregister_handler: Arc<UnregisterHandler<InMemoryDirectory>>,
}

impl AppState {
    pub fn in_memory(
        activities: impl IntoIterator<Item = ActivityState>,
        capacity_policy: CapacityPolicy,
    ) -> Self {
        Self::wire(
            InMemoryDirectory::from_activities(activities),
            capacity_policy,
        )
    }

    /// Test wiring over an unreachable directory; every request answers 500.
    pub fn in_memory_offline(
        activities: impl IntoIterator<Item = ActivityState>,
        capacity_policy: CapacityPolicy,
    ) -> Self {
        let mut directory = InMemoryDirectory::from_activities(activities);
        directory.toggle_offline();
        Self::wire(directory, capacity_policy)
    }

    fn wire(directory: InMemoryDirectory, capacity_policy: CapacityPolicy) -> Self {
        let directory = Arc::new(directory);
        Self {
            queries: directory.clone(),
            sign_up_handler: Arc::new(SignUpHandler::new(directory.clone(), capacity_policy)),
            unregister_handler: Arc::new(UnregisterHandler::new(directory)),
        }
    }
}
