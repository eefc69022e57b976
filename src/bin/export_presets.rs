// src/bin/export_presets.rs
use std::env;
use std::fs::File;

use anyhow::{Context, Result};
use dotenv::dotenv;

use retail_roi::services::presets::PresetCatalog;

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let path = env::args().nth(1).unwrap_or_else(|| "presets.csv".to_string());
    let file = File::create(&path).with_context(|| format!("cannot create {}", path))?;

    let catalog = PresetCatalog::builtin();
    catalog.write_csv(file)?;

    println!("Wrote {} presets to {}", catalog.len(), path);
    Ok(())
}
