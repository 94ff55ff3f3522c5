//! Deployment configuration for the acquisition unit.
//!
//! Calibration values live in a TOML file read at startup so a transducer
//! swap or a re-derived fit is a config change, not a rebuild. Keys omitted
//! from the file fall back to the stock hardware constants.

use crate::sensor::Calibration;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{event, Level};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Calibration of the brake line transducer channel.
    #[serde(default)]
    pub brake_transducer: Calibration,
}

impl Config {
    /// Read a `Config` from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("failed to parse config file: {}", path.display()))?;

        event!(Level::INFO, "loaded config from {}", path.display());

        Ok(config)
    }

    /// Parse a `Config` from TOML text.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config = toml::from_str(raw)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let raw = r#"
            [brake_transducer]
            v_ref = 3.3
            divider_ratio = 2.0
            adc_max = 4095
            slope = 125.0
            offset = 62.5
            psi_min = 0.0
            psi_max = 500.0
        "#;
        let config = Config::from_toml(raw).unwrap();

        assert_eq!(config.brake_transducer, Calibration::STOCK);
    }

    #[test]
    fn omitted_keys_fall_back_to_stock_values() {
        let raw = r#"
            [brake_transducer]
            slope = 120.0
            offset = 60.0
        "#;
        let config = Config::from_toml(raw).unwrap();

        assert_eq!(config.brake_transducer.slope, 120.0);
        assert_eq!(config.brake_transducer.offset, 60.0);
        assert_eq!(config.brake_transducer.v_ref, 3.3);
        assert_eq!(config.brake_transducer.adc_max, 4095);
    }

    #[test]
    fn empty_config_is_all_stock() {
        let config = Config::from_toml("").unwrap();

        assert_eq!(config.brake_transducer, Calibration::STOCK);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(Config::from_toml("[brake_transducer\n").is_err());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = Config::from_file("/nonexistent/vdaq.toml").unwrap_err();

        assert!(format!("{}", err).contains("/nonexistent/vdaq.toml"));
    }
}
