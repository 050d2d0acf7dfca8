use std::sync::Arc;

use activities_roster::modules::activities::adapters::outbound::activity_store_in_memory::InMemoryActivityStore;
use activities_roster::modules::activities::core::catalog::seed_activities;
use activities_roster::shell::config::AppConfig;
use activities_roster::shell::graphql::GRAPHQL_PATH;
use activities_roster::shell::http::app;
use activities_roster::shell::state::AppState;
use activities_roster::shell::telemetry::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing();

    // In-memory catalog, reseeded on every start
    let activities = seed_activities();
    tracing::info!(count = activities.len(), "seeding activity catalog");
    let store = Arc::new(InMemoryActivityStore::seeded(activities));
    let state = AppState::in_memory(store);

    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Roster API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, app(state, &config)).await?;
    Ok(())
}
