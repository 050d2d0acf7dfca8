use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: u64, actual: u64 },

    #[error("unknown activity: {0}")]
    UnknownActivity(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: u64,
}

/// Versioned access to the activity catalog.
///
/// `save` only succeeds when `expected_version` still matches the stored
/// version, so two writers racing on the same activity cannot both win.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, ActivityStoreError>;

    /// Returns the new version.
    async fn save(
        &self,
        activity: Activity,
        expected_version: u64,
    ) -> Result<u64, ActivityStoreError>;
}
