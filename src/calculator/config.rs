//! Calculator configuration
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "name": "Lab Calculator", "precision": 2, "when_full": "reject" }
//! ```

use std::fs;
use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::history::{HistoryFullPolicy, DEFAULT_HISTORY_CAPACITY};

/// Highest supported number of decimal places
pub const MAX_PRECISION: u32 = 15;

/// Precision used when none is configured
pub const DEFAULT_PRECISION: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Display name, must not be blank
    pub name: String,
    /// Decimal places results are rounded to, `0..=15`
    pub precision: u32,
    /// Whether successful operations are recorded
    pub history_enabled: bool,
    /// Maximum number of history entries, at least 1
    pub history_capacity: usize,
    /// Behaviour once the history is full
    pub when_full: HistoryFullPolicy,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            name: "Calculator".to_string(),
            precision: DEFAULT_PRECISION,
            history_enabled: true,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            when_full: HistoryFullPolicy::default(),
        }
    }
}

impl CalculatorConfig {
    /// Default configuration with the given name and precision
    pub fn new(name: impl Into<String>, precision: u32) -> Self {
        Self {
            name: name.into(),
            precision,
            ..Self::default()
        }
    }

    /// Check every field against its documented range
    ///
    /// # Errors
    /// Returns `InvalidInput` for a blank name, a precision above
    /// [`MAX_PRECISION`] or a zero history capacity.
    pub fn validate(&self) -> Result<(), CalcError> {
        if self.name.trim().is_empty() {
            log::debug!("Rejecting calculator config: blank name");
            return Err(CalcError::InvalidInput);
        }
        if self.precision > MAX_PRECISION {
            log::debug!(
                "Rejecting calculator config: precision {} exceeds {}",
                self.precision,
                MAX_PRECISION
            );
            return Err(CalcError::InvalidInput);
        }
        if self.history_capacity == 0 {
            log::debug!("Rejecting calculator config: zero history capacity");
            return Err(CalcError::InvalidInput);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).wrap_err("Failed to parse calculator config")?;
        config
            .validate()
            .wrap_err_with(|| format!("Invalid calculator config '{}'", config.name))?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading calculator config from {}", path.display());

        let json = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
            .wrap_err_with(|| format!("Failed to load config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn partial_json_uses_defaults() -> eyre::Result<()> {
        let config = CalculatorConfig::from_json_str(r#"{ "precision": 2 }"#)?;
        assert_eq!(config.precision, 2);
        assert_eq!(config.name, "Calculator");
        assert!(config.history_enabled);
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.when_full, HistoryFullPolicy::Drop);
        Ok(())
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(CalculatorConfig::from_json_str(r#"{ "name": "  " }"#).is_err());
        assert!(CalculatorConfig::from_json_str(r#"{ "precision": 16 }"#).is_err());
        assert!(CalculatorConfig::from_json_str(r#"{ "history_capacity": 0 }"#).is_err());
        assert!(CalculatorConfig::from_json_str(r#"{ "when_full": "evict" }"#).is_err());
        assert!(CalculatorConfig::from_json_str("not json").is_err());
    }

    #[test]
    fn validation_error_keeps_calc_error_as_root_cause() {
        let err = CalculatorConfig::from_json_str(r#"{ "precision": 99 }"#).unwrap_err();
        assert_eq!(
            err.root_cause().downcast_ref::<CalcError>(),
            Some(&CalcError::InvalidInput)
        );
    }

    #[test]
    fn loads_from_file() -> eyre::Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("calculator.json");
        fs::write(
            &path,
            r#"{ "name": "Lab", "history_capacity": 5, "when_full": "reject" }"#,
        )?;

        let config = CalculatorConfig::from_json_file(&path)?;
        assert_eq!(config.name, "Lab");
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.when_full, HistoryFullPolicy::Reject);
        Ok(())
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = CalculatorConfig::from_json_file("/nonexistent/calculator.json").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/calculator.json"));
    }
}
