use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError, LoadedActivity,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryActivityStore {
    activities: RwLock<HashMap<String, LoadedActivity>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(activities: impl IntoIterator<Item = Activity>) -> Self {
        let activities = activities
            .into_iter()
            .map(|activity| {
                (
                    activity.name.clone(),
                    LoadedActivity {
                        activity,
                        version: 0,
                    },
                )
            })
            .collect();
        Self {
            activities: RwLock::new(activities),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleeps before taking the write lock in `save`, widening the window
    /// between a load and its save.
    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), ActivityStoreError> {
        if self.is_offline {
            return Err(ActivityStoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, ActivityStoreError> {
        self.ensure_online()?;
        Ok(self.activities.read().await.get(name).cloned())
    }

    async fn save(
        &self,
        activity: Activity,
        expected_version: u64,
    ) -> Result<u64, ActivityStoreError> {
        self.ensure_online()?;

        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.activities.write().await;
        let Some(stored) = guard.get_mut(&activity.name) else {
            return Err(ActivityStoreError::UnknownActivity(activity.name));
        };
        if stored.version != expected_version {
            return Err(ActivityStoreError::VersionMismatch {
                expected: expected_version,
                actual: stored.version,
            });
        }
        stored.activity = activity;
        stored.version += 1;
        Ok(stored.version)
    }
}

#[async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<Vec<ActivityView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }

        let guard = self.activities.read().await;
        let mut views: Vec<ActivityView> = guard
            .values()
            .map(|stored| ActivityView::from(&stored.activity))
            .collect();
        views.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(views)
    }

    async fn find_activity(&self, name: &str) -> anyhow::Result<Option<ActivityView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }

        Ok(self
            .activities
            .read()
            .await
            .get(name)
            .map(|stored| ActivityView::from(&stored.activity)))
    }
}
