mod api_doc;
mod app;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::sync::Arc;

use config::Config;
use state::AppState;
use store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("hdmonks-web starting");

    let config = Config::from_env()?;
    config.log_startup();

    let store = match &config.seed_file {
        Some(path) => Store::from_seed_file(path)?,
        None => Store::new(),
    };

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        store,
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app::app(state)).await?;

    Ok(())
}
