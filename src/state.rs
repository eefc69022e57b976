// src/state.rs
use tokio::sync::RwLock;

use crate::services::dashboard::PresentationConfig;
use crate::services::presets::PresetCatalog;
use crate::services::session::{ScenarioSession, SessionError};

/// Shared by every route. The session is the only mutable part.
pub struct AppState {
    pub catalog: PresetCatalog,
    pub presentation: PresentationConfig,
    pub session: RwLock<ScenarioSession>,
}

impl AppState {
    /// Starts a session on the catalog's default preset.
    pub fn new(
        catalog: PresetCatalog,
        presentation: PresentationConfig,
        store_count: u32,
    ) -> Result<Self, SessionError> {
        let inputs = catalog.default_inputs(store_count);
        let session = ScenarioSession::new(inputs, presentation.multi_store)?;
        Ok(Self {
            catalog,
            presentation,
            session: RwLock::new(session),
        })
    }
}
