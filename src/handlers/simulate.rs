// src/handlers/simulate.rs
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;
use log::{error, info};

use crate::handlers::error::ApiError;
use crate::models::InputParameters;
use crate::services::simulation;
use crate::services::validation::validate;
use crate::state::AppState;

pub async fn simulate(inputs: InputParameters, state: Arc<AppState>) -> Result<Json, Rejection> {
    info!("Handling request to simulate {} store(s)", inputs.store_count);

    if let Err(e) = validate(&inputs) {
        error!("Rejected simulation input: {}", e);
        return Err(warp::reject::custom(ApiError::from(e)));
    }
    if !state.presentation.multi_store && inputs.store_count != 1 {
        error!("Rejected store count {} in single-store mode", inputs.store_count);
        return Err(warp::reject::custom(ApiError::bad_request(
            "store count is fixed to 1 in single-store mode",
        )));
    }

    let simulation = simulation::run(inputs, &state.presentation);
    Ok(warp::reply::json(&simulation))
}
