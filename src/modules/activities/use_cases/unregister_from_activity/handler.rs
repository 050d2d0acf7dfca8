use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::transaction::decide_and_save;
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::modules::activities::use_cases::unregister_from_activity::decide::decide_unregister;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UnregisterFromActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        command: UnregisterFromActivity,
    ) -> Result<Activity, ApplicationError> {
        let result = decide_and_save(&*self.store, &command.activity_name, |activity| {
            decide_unregister(activity, &command)
        })
        .await;

        match &result {
            Ok(_) => info!(
                activity = %command.activity_name,
                email = %command.email,
                "participant unregistered"
            ),
            Err(ApplicationError::Store(e)) => error!(
                activity = %command.activity_name,
                error = %e,
                "unregister failed"
            ),
            Err(e) => warn!(
                activity = %command.activity_name,
                email = %command.email,
                reason = %e,
                "unregister rejected"
            ),
        }
        result
    }
}
