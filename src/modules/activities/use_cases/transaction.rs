use crate::modules::activities::adapters::outbound::activity_store::{
    ActivityStore, ActivityStoreError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::use_cases::errors::ApplicationError;
use tracing::debug;

pub(crate) const MAX_ATTEMPTS: usize = 5;

/// Load, decide, evolve, save. The save is guarded by the loaded version; on a
/// version mismatch the whole cycle reruns against the fresh activity, up to
/// `MAX_ATTEMPTS` times.
pub(crate) async fn decide_and_save<TStore, F>(
    store: &TStore,
    activity_name: &str,
    decide: F,
) -> Result<Activity, ApplicationError>
where
    TStore: ActivityStore + ?Sized,
    F: Fn(&Activity) -> Decision,
{
    let mut attempt = 1;
    loop {
        let loaded = store
            .load(activity_name)
            .await?
            .ok_or_else(|| ApplicationError::ActivityNotFound(activity_name.to_string()))?;

        let activity = match decide(&loaded.activity) {
            Decision::Accepted { events } => events.into_iter().fold(loaded.activity, evolve),
            Decision::Rejected { reason } => return Err(ApplicationError::Domain(reason)),
        };

        match store.save(activity.clone(), loaded.version).await {
            Ok(_) => return Ok(activity),
            Err(ActivityStoreError::VersionMismatch { expected, actual })
                if attempt < MAX_ATTEMPTS =>
            {
                debug!(
                    activity = activity_name,
                    expected, actual, attempt, "concurrent update, retrying"
                );
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }
}
