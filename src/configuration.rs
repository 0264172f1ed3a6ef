//! Run configuration for analytic laser sources.
//!
//! Configuration is read once at startup from a JSON or YAML file and is never
//! modified afterwards. Physical parameters are validated on load, so the
//! generators themselves never have to check them.

use crate::error::ConfigError;
use crate::integrator::Timestep;
use crate::laser::Polarisation;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Parameters of a plane-wave laser pulse. All quantities are in SI units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaserConfig {
    /// Peak electric field strength, V/m.
    pub amplitude: f64,
    /// Vacuum wavelength, m.
    pub wavelength: f64,
    /// Gaussian pulse length `tau`, s. The field envelope is `exp(-t^2 / (4 tau^2))`.
    pub pulse_length: f64,
    /// Length of the upramp in units of `pulse_length / 2`.
    pub ramp_init: f64,
    /// Duration of the plateau between upramp and downramp, s.
    #[serde(default)]
    pub no_focus_length: f64,
    /// Carrier phase offset, rad.
    #[serde(default)]
    pub phase: f64,
    #[serde(default)]
    pub polarisation: Polarisation,
}

impl LaserConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_finite("amplitude", self.amplitude)?;
        require_positive("wavelength", self.wavelength)?;
        require_positive("pulse_length", self.pulse_length)?;
        require_positive("ramp_init", self.ramp_init)?;
        require_non_negative("no_focus_length", self.no_focus_length)?;
        require_finite("phase", self.phase)?;
        Ok(())
    }
}

/// A complete run: the solver timestep, an optional step count and the laser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Timestep, s.
    pub timestep: f64,
    /// Number of steps to run. If absent the run covers the whole pulse.
    #[serde(default)]
    pub steps: Option<u64>,
    pub laser: LaserConfig,
}

/// File formats a [SimulationConfig] can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Chooses the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("yaml") | Some("yml") => Ok(ConfigFormat::Yaml),
            _ => Err(ConfigError::UnknownFormat(path.to_path_buf())),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("timestep", self.timestep)?;
        self.laser.validate()
    }

    pub fn timestep(&self) -> Timestep {
        Timestep {
            delta: self.timestep,
        }
    }

    /// Parses and validates a configuration held in memory.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let config: SimulationConfig = match format {
            ConfigFormat::Json => serde_json::from_str(contents)?,
            ConfigFormat::Yaml => serde_yaml::from_str(contents)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents, format)?;
        info!(
            "Loaded configuration from {}: timestep {:e} s, {:?} polarisation",
            path.display(),
            config.timestep,
            config.laser.polarisation
        );
        Ok(config)
    }
}

fn require_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

fn require_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        })
    }
}

fn require_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidParameter {
            name,
            value,
            reason: "must not be negative",
        })
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    const JSON: &str = r#"{
        "timestep": 1.0e-17,
        "steps": 200,
        "laser": {
            "amplitude": 4.0e12,
            "wavelength": 0.8e-6,
            "pulse_length": 1.0e-14,
            "ramp_init": 3.0,
            "polarisation": "circular"
        }
    }"#;

    const YAML: &str = "
timestep: 1.0e-17
laser:
  amplitude: 1.0
  wavelength: 8.0e-7
  pulse_length: 1.0e-14
  ramp_init: 3.0
  no_focus_length: 5.0e-15
  phase: 0.5
  polarisation: linear_z
";

    #[test]
    fn test_parse_json() {
        let config = SimulationConfig::parse(JSON, ConfigFormat::Json).expect("valid config");
        assert_eq!(config.steps, Some(200));
        assert_eq!(config.laser.polarisation, Polarisation::Circular);
        assert_eq!(config.laser.no_focus_length, 0.0);
        assert_eq!(config.laser.phase, 0.0);
        assert_eq!(config.timestep().delta, 1.0e-17);
    }

    #[test]
    fn test_parse_yaml() {
        let config = SimulationConfig::parse(YAML, ConfigFormat::Yaml).expect("valid config");
        assert_eq!(config.steps, None);
        assert_eq!(config.laser.polarisation, Polarisation::LinearZ);
        assert_eq!(config.laser.no_focus_length, 5.0e-15);
        assert_eq!(config.laser.phase, 0.5);
    }

    #[test]
    fn test_rejects_invalid_parameters() {
        let mut config = SimulationConfig::parse(JSON, ConfigFormat::Json).expect("valid config");
        config.laser.pulse_length = 0.0;
        match config.validate() {
            Err(ConfigError::InvalidParameter { name, .. }) => assert_eq!(name, "pulse_length"),
            other => panic!("unexpected result {:?}", other),
        }

        config.laser.pulse_length = 1.0e-14;
        config.laser.no_focus_length = -1.0;
        assert!(config.validate().is_err());

        config.laser.no_focus_length = 0.0;
        config.laser.ramp_init = 0.0;
        match config.validate() {
            Err(ConfigError::InvalidParameter { name, .. }) => assert_eq!(name, "ramp_init"),
            other => panic!("unexpected result {:?}", other),
        }

        config.laser.ramp_init = 3.0;
        config.timestep = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("run.yml")).expect("yaml"),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("run.json")).expect("json"),
            ConfigFormat::Json
        );
        assert!(ConfigFormat::from_path(Path::new("run.toml")).is_err());
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            SimulationConfig::parse("{ \"timestep\": ", ConfigFormat::Json),
            Err(ConfigError::Json(_))
        ));
    }
}
