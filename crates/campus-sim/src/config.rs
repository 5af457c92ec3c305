//! TOML configuration loading.
//!
//! Every key is optional; missing keys fall back to [`SimConfig::default`].
//!
//! ```toml
//! tick_millis        = 100
//! first_change_ticks = 20
//! cycle_period_ticks = 300
//! final_cycle        = 7
//! total_ticks        = 2420
//! seed               = 42
//! student_count      = 250
//! output_interval_ticks = 10
//! ```

use std::fs;
use std::path::Path;

use campus_core::SimConfig;

use crate::{SimError, SimResult};

/// Read and validate a config file.
pub fn load_config(path: &Path) -> SimResult<SimConfig> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse and validate a config from a TOML string.
pub fn parse_config(contents: &str) -> SimResult<SimConfig> {
    let config: SimConfig = toml::from_str(contents).map_err(|e| SimError::Config(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Reject settings the tick loop cannot run with.
pub fn validate_config(config: &SimConfig) -> SimResult<()> {
    config.validate()?;
    Ok(())
}
