use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::activities::adapters::inbound::http_responses::{
    error_response, message_response,
};
use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignUpParams {
    pub email: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    Query(params): Query<SignUpParams>,
) -> impl IntoResponse {
    let command = SignUpForActivity::new(activity_name, params.email);
    let message = command.confirmation();

    match state.sign_up_handler.handle(command).await {
        Ok(_) => message_response(message),
        Err(e) => error_response(&e),
    }
}
