// src/handlers/mod.rs
pub mod error;
pub mod presets;
pub mod session;
pub mod simulate;
