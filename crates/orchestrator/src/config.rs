//! Configuration parsing and validation for dam-break initial states

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Dam-break scenario configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamBreakConfig {
    /// Human-readable scenario name
    pub name: String,
    /// Requested particle count (upper bound on the realized count)
    #[serde(default = "default_number")]
    pub number: usize,
    /// Mass of every particle
    #[serde(default = "default_mass")]
    pub mass: f64,
    /// Target fluid density, used to size the wall margin
    #[serde(default = "default_avg_density")]
    pub avg_density: f64,
    /// Mean of the initial velocity distribution (per axis)
    #[serde(default)]
    pub avg_velocity: f64,
    /// Standard deviation of the initial velocity distribution (per axis)
    #[serde(default = "default_std_velocity")]
    pub std_velocity: f64,
    /// Domain extents [width, height]
    #[serde(default = "default_dimensions")]
    pub dimensions: [f64; 2],
    /// RNG seed; `None` draws one from the OS
    #[serde(default)]
    pub seed: Option<u64>,
    /// Snapshot output, disabled when absent
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

/// Snapshot output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory; `positions/` and `velocities/` are created inside
    pub directory: String,
    /// Total number of frames the run will produce, sets the name padding
    #[serde(default = "default_frame_count")]
    pub frame_count: u64,
}

// Default values
fn default_number() -> usize {
    1000
}

fn default_mass() -> f64 {
    1.0
}

fn default_avg_density() -> f64 {
    1.0
}

fn default_std_velocity() -> f64 {
    1.0
}

fn default_dimensions() -> [f64; 2] {
    [10.0, 20.0]
}

fn default_frame_count() -> u64 {
    1
}

impl Default for DamBreakConfig {
    fn default() -> Self {
        Self {
            name: "dam-break".to_string(),
            number: default_number(),
            mass: default_mass(),
            avg_density: default_avg_density(),
            avg_velocity: 0.0,
            std_velocity: default_std_velocity(),
            dimensions: default_dimensions(),
            seed: None,
            output: None,
        }
    }
}

impl DamBreakConfig {
    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read config file {}: {}", path.display(), e))
        })?;

        let config: DamBreakConfig = serde_json::from_str(&contents)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.number == 0 {
            return Err(Error::Config("number must be at least 1".to_string()));
        }

        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(Error::Config("mass must be finite and positive".to_string()));
        }

        if !self.avg_density.is_finite() || self.avg_density <= 0.0 {
            return Err(Error::Config(
                "avg_density must be finite and positive".to_string(),
            ));
        }

        if !self.avg_velocity.is_finite() {
            return Err(Error::Config("avg_velocity must be finite".to_string()));
        }

        if !self.std_velocity.is_finite() || self.std_velocity < 0.0 {
            return Err(Error::Config(
                "std_velocity must be finite and non-negative".to_string(),
            ));
        }

        for (axis, extent) in ["width", "height"].iter().zip(self.dimensions) {
            if !extent.is_finite() || extent <= 0.0 {
                return Err(Error::Config(format!("{axis} must be finite and positive")));
            }
        }

        if let Some(output) = &self.output {
            if output.directory.is_empty() {
                return Err(Error::Config("output directory must not be empty".to_string()));
            }
            if output.frame_count == 0 {
                return Err(Error::Config("frame_count must be at least 1".to_string()));
            }
        }

        Ok(())
    }

    /// Domain width
    pub fn width(&self) -> f64 {
        self.dimensions[0]
    }

    /// Domain height
    pub fn height(&self) -> f64 {
        self.dimensions[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DamBreakConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.number, 1000);
        assert_eq!(config.width(), 10.0);
        assert_eq!(config.height(), 20.0);
    }

    #[test]
    fn test_parse_minimal_json_fills_defaults() {
        let config: DamBreakConfig = serde_json::from_str(r#"{ "name": "minimal" }"#).unwrap();
        assert_eq!(config.name, "minimal");
        assert_eq!(config.mass, 1.0);
        assert_eq!(config.avg_velocity, 0.0);
        assert_eq!(config.std_velocity, 1.0);
        assert_eq!(config.dimensions, [10.0, 20.0]);
        assert!(config.seed.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn test_parse_output_section() {
        let config: DamBreakConfig = serde_json::from_str(
            r#"{ "name": "out", "seed": 9, "output": { "directory": "data" } }"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(9));
        let output = config.output.unwrap();
        assert_eq!(output.directory, "data");
        assert_eq!(output.frame_count, 1);
    }

    #[test]
    fn test_validation_mass() {
        let mut config = DamBreakConfig {
            mass: 0.0,
            ..DamBreakConfig::default()
        };
        assert!(config.validate().is_err());

        config.mass = 2.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_dimensions() {
        let mut config = DamBreakConfig {
            dimensions: [10.0, -1.0],
            ..DamBreakConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("height"));

        config.dimensions = [10.0, 1.0];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_velocity_spread() {
        let mut config = DamBreakConfig {
            std_velocity: -0.1,
            ..DamBreakConfig::default()
        };
        assert!(config.validate().is_err());

        config.std_velocity = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_output() {
        let config = DamBreakConfig {
            output: Some(OutputConfig {
                directory: "data".to_string(),
                frame_count: 0,
            }),
            ..DamBreakConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
