use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use async_trait::async_trait;
use std::collections::BTreeMap;

#[async_trait]
pub trait ActivityQueries {
    async fn list_all(&self) -> anyhow::Result<BTreeMap<String, ActivityView>>;
}
