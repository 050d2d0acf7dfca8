use axum::{Json, extract::State, response::IntoResponse};
use std::collections::BTreeMap;
use tracing::error;

use crate::modules::activities::adapters::inbound::http_responses::internal_error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.queries.list_activities().await {
        Ok(activities) => {
            let by_name: BTreeMap<String, _> = activities
                .into_iter()
                .map(|view| (view.name.clone(), view))
                .collect();
            Json(by_name).into_response()
        }
        Err(e) => {
            error!(error = %e, "listing activities failed");
            internal_error_response()
        }
    }
}
