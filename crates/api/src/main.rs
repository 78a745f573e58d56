use std::sync::Arc;

use anyhow::Context;

use bakeryplan_api::app::{build_app, services::AppServices};
use bakeryplan_api::clock::SystemClock;
use bakeryplan_api::config::ApiConfig;
use bakeryplan_catalog::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bakeryplan_observability::init();

    let config = ApiConfig::from_env()?;
    let services = AppServices::new(config.planning, Catalog::bakery(), Arc::new(SystemClock))
        .context("invalid planning configuration")?;

    let app = build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
