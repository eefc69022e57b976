// src/services/session.rs
use log::{debug, warn};
use serde::Serialize;
use thiserror::Error;

use crate::models::{InputEdit, InputParameters, RoiResult};
use crate::services::calculations::compute;
use crate::services::presets::Preset;
use crate::services::validation::{validate, ValidationError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("store count is fixed to 1 in single-store mode")]
    StoreCountFixed,
}

/// The host's mutable copy of the inputs. The engine only ever sees
/// snapshots copied out of it.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioSession {
    inputs: InputParameters,
    preset_description: Option<String>,
    #[serde(skip)]
    multi_store: bool,
}

impl ScenarioSession {
    pub fn new(inputs: InputParameters, multi_store: bool) -> Result<Self, SessionError> {
        let inputs = if multi_store {
            inputs
        } else {
            InputParameters { store_count: 1, ..inputs }
        };
        validate(&inputs)?;
        Ok(Self {
            inputs,
            preset_description: None,
            multi_store,
        })
    }

    pub fn inputs(&self) -> InputParameters {
        self.inputs
    }

    pub fn preset_description(&self) -> Option<&str> {
        self.preset_description.as_deref()
    }

    /// Replaces every scenario field with the preset's values; the store count stays.
    pub fn apply_preset(&mut self, preset: &Preset) {
        debug!("Applying preset '{}'", preset.name);
        self.inputs = preset.apply_to(&self.inputs);
        self.preset_description = Some(preset.description.clone());
    }

    /// Applies a partial edit. The session is left untouched when the
    /// edited snapshot would be invalid.
    pub fn apply_edit(&mut self, edit: &InputEdit) -> Result<InputParameters, SessionError> {
        if edit.touches_store_count() && !self.multi_store && edit.store_count != Some(1) {
            warn!("Rejected store count edit in single-store mode");
            return Err(SessionError::StoreCountFixed);
        }

        let edited = edit.applied_to(&self.inputs);
        if let Err(e) = validate(&edited) {
            warn!("Rejected session edit: {}", e);
            return Err(e.into());
        }

        self.inputs = edited;
        Ok(edited)
    }

    pub fn set_store_count(&mut self, store_count: u32) -> Result<InputParameters, SessionError> {
        self.apply_edit(&InputEdit {
            store_count: Some(store_count),
            ..InputEdit::default()
        })
    }

    /// Recomputed on every call.
    pub fn simulate(&self) -> RoiResult {
        compute(&self.inputs)
    }
}
