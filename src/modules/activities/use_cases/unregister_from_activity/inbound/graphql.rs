use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister(
        &self,
        context: &Context<'_>,
        activity: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = UnregisterFromActivity::new(activity, email);
        let message = command.confirmation();

        state
            .unregister_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(message)
    }
}
