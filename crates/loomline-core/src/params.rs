//! JSON parameter-file loading.
//!
//! Feature-gated behind `params-loader`. The file shape is the
//! [`SimConfig`] record itself: an ordered `stations` array (order is the
//! transition sequence), a `conveyor_path` waypoint array, and the scalar
//! tuning knobs. Loading always validates, so an engine built from a
//! loaded config cannot fail validation again.

use crate::config::{ConfigError, SimConfig};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a parameter file.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Loading functions
// ---------------------------------------------------------------------------

/// Load and validate a configuration from a JSON string.
pub fn load_params_json(json: &str) -> Result<SimConfig, ParamsError> {
    let config: SimConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a configuration from JSON bytes.
pub fn load_params_json_bytes(bytes: &[u8]) -> Result<SimConfig, ParamsError> {
    let config: SimConfig = serde_json::from_slice(bytes)?;
    config.validate()?;
    Ok(config)
}

// ===========================================================================
// Tests
// ===========================================================================
