use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use tracing::error;

use crate::modules::activities::adapters::inbound::http_responses::{
    error_response, internal_error_response,
};
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
) -> impl IntoResponse {
    match state.queries.find_activity(&activity_name).await {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => error_response(&ApplicationError::ActivityNotFound(activity_name)),
        Err(e) => {
            error!(activity = %activity_name, error = %e, "loading activity failed");
            internal_error_response()
        }
    }
}
