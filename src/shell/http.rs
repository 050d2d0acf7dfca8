use axum::{
    Extension, Json, Router,
    extract::Request,
    response::Redirect,
    routing::{delete, get, post},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use uuid::Uuid;

use crate::modules::activities::use_cases::get_activity::inbound::http as get_http;
use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::config::AppConfig;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// API routes only: REST, GraphQL and health.
pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/activities", get(list_http::handle))
        .route("/activities/{name}", get(get_http::handle))
        .route("/activities/{name}/signup", post(sign_up_http::handle))
        .route("/activities/{name}/unregister", delete(unregister_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .with_state(state)
}

/// The full application: API routes, the static frontend and request tracing.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    router(state)
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = Uuid::now_v7();
                tracing::info_span!(
                    "request",
                    %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}
