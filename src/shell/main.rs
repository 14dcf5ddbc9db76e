use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::modules::attendance::adapters::outbound::record_store_in_memory::InMemoryRecordStore;
use attendance::shared::infrastructure::clock::SystemClock;
use attendance::shared::infrastructure::identity::in_memory::InMemoryAuthenticator;
use attendance::shell::config::Config;
use attendance::shell::graphql::build_schema;
use attendance::shell::http::router;
use attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;
    fmt().with_env_filter(filter).init();

    // In-memory deps for now
    let store = Arc::new(InMemoryRecordStore::new());
    let authenticator = Arc::new(InMemoryAuthenticator::with_tokens(config.tokens.clone()));
    if config.tokens.is_empty() {
        tracing::warn!("ATTENDANCE_TOKENS is empty, every caller is anonymous");
    }

    let state = AppState::new(store, authenticator, Arc::new(SystemClock));
    let schema = build_schema(state.clone());

    let mut app = router(state, schema).layer(TraceLayer::new_for_http());
    if config.cors {
        app = app.layer(CorsLayer::permissive());
    }

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "attendance API listening, GraphQL on /graphql");
    axum::serve(listener, app).await?;
    Ok(())
}
