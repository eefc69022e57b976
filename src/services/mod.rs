// src/services/mod.rs
pub mod calculations;
pub mod dashboard;
pub mod format;
pub mod presets;
pub mod recommendations;
pub mod session;
pub mod simulation;
pub mod validation;
