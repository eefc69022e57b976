// src/handlers/presets.rs
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;
use log::info;

use crate::state::AppState;

pub async fn list_presets(state: Arc<AppState>) -> Result<Json, Rejection> {
    info!("Handling request to list presets");
    let presets: Vec<_> = state.catalog.iter().collect();
    Ok(warp::reply::json(&presets))
}
