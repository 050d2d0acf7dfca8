use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_responses::{
    error_response, message_response,
};
use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UnregisterParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<UnregisterParams>,
) -> impl IntoResponse {
    let command = UnregisterFromActivity::new(activity_name, params.email);
    let message = command.confirmation();

    match state.unregister_handler.handle(command).await {
        Ok(_) => message_response(message),
        Err(e) => error_response(&e),
    }
}
