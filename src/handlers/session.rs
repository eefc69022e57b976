// src/handlers/session.rs
use std::sync::Arc;
use serde::Deserialize;
use warp::reply::Json;
use warp::Rejection;
use log::{error, info};

use crate::handlers::error::ApiError;
use crate::models::InputEdit;
use crate::services::simulation;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PresetSelection {
    pub name: String,
}

pub async fn get_session(state: Arc<AppState>) -> Result<Json, Rejection> {
    info!("Handling request to get session inputs");
    let session = state.session.read().await;
    Ok(warp::reply::json(&*session))
}

pub async fn edit_session(edit: InputEdit, state: Arc<AppState>) -> Result<Json, Rejection> {
    info!("Handling request to edit session inputs");
    let mut session = state.session.write().await;
    session.apply_edit(&edit).map_err(|e| {
        error!("Session edit failed: {}", e);
        warp::reject::custom(ApiError::from(e))
    })?;
    Ok(warp::reply::json(&*session))
}

pub async fn apply_preset(selection: PresetSelection, state: Arc<AppState>) -> Result<Json, Rejection> {
    info!("Handling request to apply preset '{}'", selection.name);
    let preset = state.catalog.get(&selection.name).map_err(|e| {
        error!("Preset not applied: {}", e);
        warp::reject::custom(ApiError::from(e))
    })?;

    let mut session = state.session.write().await;
    session.apply_preset(preset);
    Ok(warp::reply::json(&*session))
}

pub async fn simulate_session(state: Arc<AppState>) -> Result<Json, Rejection> {
    info!("Handling request to simulate session inputs");
    let inputs = state.session.read().await.inputs();
    Ok(warp::reply::json(&simulation::run(inputs, &state.presentation)))
}
