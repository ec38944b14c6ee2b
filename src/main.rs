use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use xg_service::api;
use xg_service::config::Config;
use xg_service::store::DataStore;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("xg_service=info")),
        )
        .init();

    let config = Config::from_env();
    info!(
        "starting with competitions={} model={}",
        config.competitions_path.display(),
        config.model_path.display()
    );

    let store = Arc::new(DataStore::new(&config));
    let app = api::router(store);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("bind {}", config.bind_addr))?;
    info!("listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("serve")?;
    Ok(())
}
