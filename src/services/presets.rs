// src/services/presets.rs
use std::fs::File;
use std::path::Path;

use csv::{Reader, Writer};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::InputParameters;
use crate::services::validation::{validate, ValidationError};

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("unknown preset: {0}")]
    Unknown(String),

    #[error("preset file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("preset CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("preset '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ValidationError,
    },

    #[error("preset '{0}' is defined more than once")]
    Duplicate(String),

    #[error("preset catalog is empty")]
    Empty,
}

/// A named store category with a full set of scenario inputs.
/// One CSV row per preset uses these field names as its header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub description: String,
    pub visitors_per_day: f64,
    pub conversion_rate: f64,
    pub average_ticket_value: f64,
    pub open_days_per_week: u32,
    pub capital_expense: f64,
    pub monthly_subscription: f64,
    pub gross_margin: f64,
    pub conversion_uplift: f64,
    pub price_uplift: f64,
    pub saturday_revenue_share: f64,
    pub saturday_conversion_boost: f64,
}

impl Preset {
    /// Overwrites every scenario field of `current`; the store count is kept.
    pub fn apply_to(&self, current: &InputParameters) -> InputParameters {
        self.inputs(current.store_count)
    }

    pub fn inputs(&self, store_count: u32) -> InputParameters {
        InputParameters {
            visitors_per_day: self.visitors_per_day,
            conversion_rate: self.conversion_rate,
            average_ticket_value: self.average_ticket_value,
            open_days_per_week: self.open_days_per_week,
            capital_expense: self.capital_expense,
            monthly_subscription: self.monthly_subscription,
            gross_margin: self.gross_margin,
            conversion_uplift: self.conversion_uplift,
            price_uplift: self.price_uplift,
            saturday_revenue_share: self.saturday_revenue_share,
            saturday_conversion_boost: self.saturday_conversion_boost,
            store_count,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn preset(
    name: &str,
    visitors_per_day: f64,
    conversion_rate: f64,
    average_ticket_value: f64,
    open_days_per_week: u32,
    gross_margin: f64,
    conversion_uplift: f64,
    price_uplift: f64,
    saturday_revenue_share: f64,
    saturday_conversion_boost: f64,
    description: &str,
) -> Preset {
    Preset {
        name: name.to_string(),
        description: description.to_string(),
        visitors_per_day,
        conversion_rate,
        average_ticket_value,
        open_days_per_week,
        capital_expense: 1500.0,
        monthly_subscription: 30.0,
        gross_margin,
        conversion_uplift,
        price_uplift,
        saturday_revenue_share,
        saturday_conversion_boost,
    }
}

/// Ordered preset lookup. The first entry is the default selection.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn builtin() -> Self {
        Self {
            presets: vec![
                preset(
                    "Fashion Retail",
                    800.0, 0.20, 45.0, 7, 0.60, 0.05, 0.05, 0.18, 0.10,
                    "Fashion: steady weekday traffic, weekend peaks; upsell and fitting-room conversion drive ROI.",
                ),
                preset(
                    "Optics & Eyewear",
                    250.0, 0.35, 140.0, 6, 0.65, 0.04, 0.06, 0.20, 0.08,
                    "Optics: higher ATV with appointment-like footfall; staffing around Saturday boosts conversion.",
                ),
                preset(
                    "Sports & Outdoor",
                    600.0, 0.22, 60.0, 7, 0.58, 0.05, 0.07, 0.22, 0.12,
                    "Sports: seasonal peaks; demo zones and weekend traffic make SPV and conversion pop.",
                ),
                preset(
                    "Drugstore & Personal Care",
                    900.0, 0.28, 22.0, 7, 0.40, 0.03, 0.04, 0.16, 0.06,
                    "Drugstore: high frequency, lower ATV; queue reduction and cross-sell lift weekend ROI.",
                ),
            ],
        }
    }

    /// Builds a catalog from already-parsed presets, rejecting duplicates and
    /// presets whose values fall outside the allowed input ranges.
    pub fn from_presets(presets: Vec<Preset>) -> Result<Self, PresetError> {
        if presets.is_empty() {
            return Err(PresetError::Empty);
        }
        for (i, preset) in presets.iter().enumerate() {
            if presets[..i].iter().any(|p| p.name == preset.name) {
                return Err(PresetError::Duplicate(preset.name.clone()));
            }
            validate(&preset.inputs(1)).map_err(|source| PresetError::Invalid {
                name: preset.name.clone(),
                source,
            })?;
        }
        Ok(Self { presets })
    }

    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self, PresetError> {
        let mut rdr = Reader::from_reader(reader);
        let presets = rdr
            .deserialize::<Preset>()
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_presets(presets)
    }

    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        info!("Loading preset catalog from {}", path.display());
        let catalog = Self::from_csv_reader(File::open(path)?)?;
        info!("Loaded {} presets", catalog.len());
        Ok(catalog)
    }

    /// Uses the CSV at `path` when one is configured, the built-in presets otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, PresetError> {
        match path {
            Some(path) => Self::from_csv_path(path),
            None => Ok(Self::builtin()),
        }
    }

    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), PresetError> {
        let mut wtr = Writer::from_writer(writer);
        for preset in &self.presets {
            wtr.serialize(preset)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Preset, PresetError> {
        self.presets.iter().find(|p| p.name == name).ok_or_else(|| {
            warn!("Preset lookup failed for '{}'", name);
            PresetError::Unknown(name.to_string())
        })
    }

    pub fn default_preset(&self) -> &Preset {
        // from_presets and builtin never produce an empty catalog
        &self.presets[0]
    }

    pub fn default_inputs(&self, store_count: u32) -> InputParameters {
        self.default_preset().inputs(store_count)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}
