// src/services/simulation.rs
use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;

use crate::models::{InputParameters, RoiResult};
use crate::services::calculations::compute;
use crate::services::dashboard::{self, Dashboard, PresentationConfig};
use crate::services::recommendations::{recommend, Recommendation};

/// Everything the page needs for one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    pub inputs: InputParameters,
    pub result: RoiResult,
    pub dashboard: Dashboard,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

pub fn run(inputs: InputParameters, config: &PresentationConfig) -> Simulation {
    let result = compute(&inputs);
    debug!(
        "Simulated {} store(s): baseline {:.2}, scenario {:.2}, uplift {:.2}, payback {:?}",
        inputs.store_count,
        result.baseline_annual_revenue,
        result.scenario_annual_revenue,
        result.annual_uplift,
        result.payback()
    );

    Simulation {
        inputs,
        dashboard: dashboard::build(&inputs, &result, config),
        recommendations: recommend(&inputs, &result),
        result,
        generated_at: Utc::now(),
    }
}
