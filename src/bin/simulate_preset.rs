// src/bin/simulate_preset.rs
use std::env;

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use log::info;

use retail_roi::config::AppConfig;
use retail_roi::services::presets::PresetCatalog;
use retail_roi::services::simulation;
use retail_roi::services::validation::validate;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(name) = args.next() else {
        bail!("usage: simulate_preset <preset name> [store count]");
    };

    let config = AppConfig::from_env()?;
    let stores: u32 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid store count '{}'", s))?,
        None => config.default_store_count,
    };

    let catalog = PresetCatalog::load(config.presets_csv.as_deref())?;
    let preset = catalog.get(&name)?;
    info!("Simulating '{}' for {} store(s)", preset.name, stores);

    let stores = if config.presentation.multi_store { stores } else { 1 };
    let inputs = preset.inputs(stores);
    validate(&inputs)?;

    let sim = simulation::run(inputs, &config.presentation);

    println!("{}", preset.name);
    println!("{}", preset.description);
    println!();
    for card in &sim.dashboard.cards {
        println!("{:<32} {:>16}   {}", card.title, card.display, card.subtitle);
    }
    println!();
    for slice in &sim.dashboard.donut_chart.slices {
        println!("{:<12} {:>6.1}%   uplift {}", slice.label, slice.share * 100.0, slice.display);
    }
    println!();
    for rec in &sim.recommendations {
        println!("- {}", rec.message);
    }
    Ok(())
}
