use crate::modules::activities::adapters::outbound::activity_store::ActivityStore;
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::modules::activities::use_cases::sign_up_for_activity::decide::decide_sign_up;
use crate::modules::activities::use_cases::transaction::decide_and_save;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> SignUpForActivityHandler<TStore>
where
    TStore: ActivityStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: SignUpForActivity) -> Result<Activity, ApplicationError> {
        let result = decide_and_save(&*self.store, &command.activity_name, |activity| {
            decide_sign_up(activity, &command)
        })
        .await;

        match &result {
            Ok(activity) => info!(
                activity = %command.activity_name,
                email = %command.email,
                spots_left = activity.spots_left(),
                "participant signed up"
            ),
            Err(ApplicationError::Store(e)) => error!(
                activity = %command.activity_name,
                error = %e,
                "sign up failed"
            ),
            Err(e) => warn!(
                activity = %command.activity_name,
                email = %command.email,
                reason = %e,
                "sign up rejected"
            ),
        }
        result
    }
}
