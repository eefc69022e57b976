// src/routes.rs
use std::sync::Arc;
use warp::reject::Rejection;
use crate::handlers::{presets::list_presets, session::apply_preset, session::edit_session,
                      session::get_session, session::simulate_session, simulate::simulate};
use crate::state::AppState;
use log::{error, info};

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Filter, Reply};
use crate::handlers::error::ApiError;

// Maps rejections to a JSON error body
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let code;
    let message: String;

    if err.is_not_found() {
        code = StatusCode::NOT_FOUND;
        message = "Not Found".to_string();
    } else if let Some(api_error) = err.find::<ApiError>() {
        code = api_error.status;
        message = api_error.message.clone();
    } else if let Some(body_error) = err.find::<warp::filters::body::BodyDeserializeError>() {
        code = StatusCode::BAD_REQUEST;
        message = format!("Invalid request body: {}", body_error);
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        code = StatusCode::UNSUPPORTED_MEDIA_TYPE;
        message = "Expected a JSON body".to_string();
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        code = StatusCode::METHOD_NOT_ALLOWED;
        message = "Method Not Allowed".to_string();
    } else {
        error!("Unhandled rejection: {:?}", err);
        code = StatusCode::INTERNAL_SERVER_ERROR;
        message = "Internal Server Error".to_string();
    }

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
        })),
        code,
    ))
}

pub fn routes(state: Arc<AppState>) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let state_filter = warp::any().map(move || state.clone());

    let presets_route = warp::path!("api" / "v1" / "presets")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(list_presets);

    let simulate_route = warp::path!("api" / "v1" / "simulate")
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and_then(simulate);

    let session_route = warp::path!("api" / "v1" / "session")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(get_session);

    let session_inputs_route = warp::path!("api" / "v1" / "session" / "inputs")
        .and(warp::patch())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and_then(edit_session);

    let session_preset_route = warp::path!("api" / "v1" / "session" / "preset")
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter.clone())
        .and_then(apply_preset);

    let session_simulation_route = warp::path!("api" / "v1" / "session" / "simulation")
        .and(warp::get())
        .and(state_filter.clone())
        .and_then(simulate_session);

    info!("All routes configured successfully.");

    presets_route
        .or(simulate_route)
        .or(session_route)
        .or(session_inputs_route)
        .or(session_preset_route)
        .or(session_simulation_route)
        .recover(handle_rejection)
}
