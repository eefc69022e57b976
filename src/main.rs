use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use log::info;
use warp::Filter;

use retail_roi::config::AppConfig;
use retail_roi::routes;
use retail_roi::services::presets::PresetCatalog;
use retail_roi::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = AppConfig::from_env().context("invalid configuration")?;
    info!(
        "Using PORT: {}, locale: {}, expo: {}, multi-store: {}",
        config.port,
        config.presentation.locale,
        config.presentation.expo,
        config.presentation.multi_store
    );

    let catalog = PresetCatalog::load(config.presets_csv.as_deref())
        .context("failed to load preset catalog")?;
    info!("Preset catalog ready with {} presets", catalog.len());

    let state = AppState::new(catalog, config.presentation, config.default_store_count)
        .context("default preset does not produce a valid session")?;

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    info!("Will bind to: {}", addr);

    // Set up CORS
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST", "PATCH"]);

    // Set up routes
    let api = routes::routes(Arc::new(state)).with(cors);
    info!("Routes configured successfully with CORS.");

    // Start the server
    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
    Ok(())
}
