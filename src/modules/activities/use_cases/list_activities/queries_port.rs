use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityQueries {
    /// Every activity in the catalog, ordered by name.
    async fn list_activities(&self) -> anyhow::Result<Vec<ActivityView>>;

    async fn find_activity(&self, name: &str) -> anyhow::Result<Option<ActivityView>>;
}
