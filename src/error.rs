//! Error types
//!
//! The simulation itself never fails mid-tick; everything here is raised while
//! building a game, loading settings, or wiring up the host platform.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("play field must be positive and finite, got {width}x{height}")]
    InvalidField { width: f32, height: f32 },

    #[error("play field {width}x{height} cannot fit an entity of size {needed}")]
    FieldTooSmall { width: f32, height: f32, needed: f32 },

    #[error("player size must be positive and finite, got {width}x{height}")]
    InvalidPlayer { width: f32, height: f32 },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("settings could not be parsed: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("platform error: {0}")]
    Platform(String),
}
