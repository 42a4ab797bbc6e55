// src/config.rs

use serde::Deserialize;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::units::inches_to_meters;

fn default_input_root() -> String {
    "Power Output Data".to_string()
}

fn default_output_root() -> String {
    "outputs".to_string()
}

/// Mechanical constants of the power rig plus the input/output roots.
/// Loaded once from `config.json` and passed by reference everywhere;
/// nothing reads configuration ambiently.
#[derive(Debug, Clone, Deserialize)]
pub struct RigConfig {
    pub gear3_teeth: u32,
    pub gear4_teeth: u32,
    pub wheel2_radius_inches: f64,
    #[serde(default = "default_input_root")]
    pub input_root: String,
    #[serde(default = "default_output_root")]
    pub output_root: String,
}

impl RigConfig {
    /// Loads and validates the rig configuration. A missing or malformed
    /// file is a fatal error: the torque formula is meaningless without
    /// trusted gear constants.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)
            .map_err(|e| format!("Failed to open config '{}': {}", path.display(), e))?;
        let config: RigConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| format!("Failed to parse config '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a config from a JSON string. Used by tests; `load` is the
    /// file-backed entry point.
    pub fn from_json_str(text: &str) -> Result<Self, Box<dyn Error>> {
        let config: RigConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.gear3_teeth == 0 {
            return Err("Invalid config: gear3_teeth must be a positive integer".into());
        }
        if self.gear4_teeth == 0 {
            return Err("Invalid config: gear4_teeth must be a positive integer".into());
        }
        if !self.wheel2_radius_inches.is_finite() || self.wheel2_radius_inches <= 0.0 {
            return Err("Invalid config: wheel2_radius_inches must be a positive number".into());
        }
        Ok(())
    }

    /// Effective wheel radius in metres, as used by the torque formula.
    pub fn wheel2_radius_m(&self) -> f64 {
        inches_to_meters(self.wheel2_radius_inches)
    }
}
