//! Result reporting configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Configuration for the append-only result log.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    /// Path of the result log file; parent directories are created on demand.
    #[serde(default = "default_results_log_path")]
    pub results_log_path: PathBuf,
}

impl ReportingConfig {
    /// Validate reporting configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.results_log_path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyLogPath);
        }
        Ok(())
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            results_log_path: default_results_log_path(),
        }
    }
}

fn default_results_log_path() -> PathBuf {
    PathBuf::from("./.ecoimpact/results.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = ReportingConfig::default();
        assert_eq!(
            config.results_log_path,
            PathBuf::from("./.ecoimpact/results.log")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_path() {
        let config = ReportingConfig {
            results_log_path: PathBuf::new(),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLogPath));
    }
}
