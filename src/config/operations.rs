//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{EditLockError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(EditLockError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            EditLockError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            EditLockError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            EditLockError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `lease_duration_ms` must be positive
    /// - `sweep_interval_ms` must be positive
    /// - `sweep_interval_ms` must be shorter than `lease_duration_ms`, otherwise
    ///   expired leases could outlive their duration by more than a full lease
    pub fn validate(&self) -> Result<()> {
        if self.lease_duration_ms == 0 {
            return Err(EditLockError::ConfigError(
                "lease_duration_ms must be greater than 0".to_string(),
            ));
        }

        if self.sweep_interval_ms == 0 {
            return Err(EditLockError::ConfigError(
                "sweep_interval_ms must be greater than 0".to_string(),
            ));
        }

        if self.sweep_interval_ms >= self.lease_duration_ms {
            return Err(EditLockError::ConfigError(format!(
                "sweep_interval_ms ({}) must be shorter than lease_duration_ms ({})",
                self.sweep_interval_ms, self.lease_duration_ms
            )));
        }

        Ok(())
    }

    /// Lease duration as a chrono delta, for comparing against lease timestamps.
    pub fn lease_duration(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(i64::try_from(self.lease_duration_ms).unwrap_or(i64::MAX))
    }

    /// Reaper tick interval.
    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.sweep_interval_ms)
    }
}
