// tests/api.rs
use std::sync::Arc;

use serde_json::{json, Value};
use warp::http::StatusCode;

use retail_roi::routes::routes;
use retail_roi::services::dashboard::PresentationConfig;
use retail_roi::services::format::Locale;
use retail_roi::services::presets::PresetCatalog;
use retail_roi::state::AppState;

fn state(presentation: PresentationConfig, stores: u32) -> Arc<AppState> {
    Arc::new(AppState::new(PresetCatalog::builtin(), presentation, stores).unwrap())
}

fn chain_state() -> Arc<AppState> {
    state(PresentationConfig::default(), 50)
}

fn body<B: AsRef<[u8]>>(resp: &warp::http::Response<B>) -> Value {
    serde_json::from_slice(resp.body().as_ref()).unwrap()
}

fn fashion_body() -> Value {
    json!({
        "visitors_per_day": 800.0,
        "conversion_rate": 0.20,
        "average_ticket_value": 45.0,
        "open_days_per_week": 7,
        "capital_expense": 1500.0,
        "monthly_subscription": 30.0,
        "gross_margin": 0.60,
        "conversion_uplift": 0.05,
        "price_uplift": 0.05,
        "saturday_revenue_share": 0.18,
        "saturday_conversion_boost": 0.10
    })
}

#[tokio::test]
async fn lists_presets_in_order() {
    let api = routes(chain_state());
    let resp = warp::test::request().method("GET").path("/api/v1/presets").reply(&api).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let presets = body(&resp);
    let names: Vec<&str> = presets
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["Fashion Retail", "Optics & Eyewear", "Sports & Outdoor", "Drugstore & Personal Care"]
    );
    assert_eq!(presets[1]["average_ticket_value"], json!(140.0));
}

#[tokio::test]
async fn simulate_defaults_to_one_store() {
    let api = routes(chain_state());
    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/simulate")
        .json(&fashion_body())
        .reply(&api)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let sim = body(&resp);
    assert_eq!(sim["inputs"]["store_count"], json!(1));

    let baseline = sim["result"]["baseline_annual_revenue"].as_f64().unwrap();
    let scenario = sim["result"]["scenario_annual_revenue"].as_f64().unwrap();
    assert!((baseline - 2_620_800.0).abs() < 0.005);
    assert!((scenario - 2_941_441.776).abs() < 0.005);

    assert_eq!(sim["dashboard"]["cards"][0]["display"], json!("€2.620.800"));
    assert_eq!(sim["recommendations"][0]["kind"], json!("activate_upsell"));
    assert!(sim["generated_at"].is_string());
}

#[tokio::test]
async fn no_payback_is_serialized_as_null() {
    let api = routes(chain_state());
    let mut inputs = fashion_body();
    inputs["conversion_uplift"] = json!(0.0);
    inputs["price_uplift"] = json!(0.0);
    inputs["saturday_conversion_boost"] = json!(0.0);

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/simulate")
        .json(&inputs)
        .reply(&api)
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let sim = body(&resp);
    assert!(sim["result"]["payback_months"].is_null());
    assert_eq!(sim["result"]["annual_uplift"], json!(0.0));
    assert_eq!(sim["result"]["attribution"]["conversion_share"], json!(0.5));
    assert_eq!(sim["dashboard"]["cards"][3]["display"], json!("n/a"));
    assert_eq!(sim["recommendations"][0]["kind"], json!("raise_ticket_or_conversion"));
}

#[tokio::test]
async fn simulate_rejects_out_of_range_input() {
    let api = routes(chain_state());
    let mut inputs = fashion_body();
    inputs["gross_margin"] = json!(0.95);

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/simulate")
        .json(&inputs)
        .reply(&api)
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body(&resp)["error"].as_str().unwrap().contains("gross_margin"));
}

#[tokio::test]
async fn simulate_rejects_malformed_body() {
    let api = routes(chain_state());
    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/simulate")
        .header("content-type", "application/json")
        .body(r#"{"visitors_per_day": "lots"}"#)
        .reply(&api)
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn single_store_mode_rejects_chains() {
    let config = PresentationConfig {
        locale: Locale::En,
        expo: false,
        multi_store: false,
    };
    let api = routes(state(config, 1));
    let mut inputs = fashion_body();
    inputs["store_count"] = json!(5);

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/simulate")
        .json(&inputs)
        .reply(&api)
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn session_preset_keeps_store_count() {
    let state = chain_state();
    let api = routes(state.clone());

    let resp = warp::test::request()
        .method("PATCH")
        .path("/api/v1/session/inputs")
        .json(&json!({ "store_count": 12, "visitors_per_day": 1000.0 }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(&resp)["inputs"]["visitors_per_day"], json!(1000.0));

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/session/preset")
        .json(&json!({ "name": "Sports & Outdoor" }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let session = body(&resp);
    assert_eq!(session["inputs"]["store_count"], json!(12));
    assert_eq!(session["inputs"]["visitors_per_day"], json!(600.0));
    assert!(session["preset_description"].as_str().unwrap().starts_with("Sports:"));

    let resp = warp::test::request()
        .method("GET")
        .path("/api/v1/session/simulation")
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let sim = body(&resp);
    assert_eq!(sim["inputs"]["store_count"], json!(12));
    assert_eq!(sim["dashboard"]["cards"][0]["subtitle"], json!("× 12 stores"));
}

#[tokio::test]
async fn session_rejects_unknown_preset_and_invalid_edit() {
    let state = chain_state();
    let api = routes(state.clone());
    let before = state.session.read().await.inputs();

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/session/preset")
        .json(&json!({ "name": "Bakery" }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = warp::test::request()
        .method("PATCH")
        .path("/api/v1/session/inputs")
        .json(&json!({ "open_days_per_week": 9 }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    assert_eq!(state.session.read().await.inputs(), before);

    let resp = warp::test::request().method("GET").path("/api/v1/session").reply(&api).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body(&resp)["inputs"]["store_count"], json!(50));
    assert!(body(&resp)["preset_description"].is_null());
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let api = routes(chain_state());
    let resp = warp::test::request().method("GET").path("/api/v1/nothing").reply(&api).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
