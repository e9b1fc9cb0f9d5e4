use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hydration::shared::infrastructure::auth::in_memory::InMemoryAuth;
use hydration::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use hydration::shared::infrastructure::records::in_memory::InMemoryRecords;
use hydration::shell::config::Config;
use hydration::shell::http::router;
use hydration::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;

    // In-memory collaborators for now
    let records = Arc::new(InMemoryRecords::new());
    let notifier = Arc::new(InMemoryNotifier::new());
    let auth = Arc::new(InMemoryAuth::new());
    let state = AppState::new(records, notifier, auth, &config);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("HTTP API on http://{addr}, GraphQL on http://{addr}/graphql");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
