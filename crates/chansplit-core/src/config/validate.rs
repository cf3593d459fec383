//! Configuration validation with range checks.

use crate::error::ConfigError;
use crate::output::OutputFormat;

use super::Config;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_file_size_mb == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_file_size_mb must be > 0".into(),
            ));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if self.test_image.width == 0 || self.test_image.height == 0 {
            return Err(ConfigError::ValidationError(
                "test_image.width and test_image.height must be > 0".into(),
            ));
        }
        let base = self.output.base_name.trim();
        if base.is_empty() {
            return Err(ConfigError::ValidationError(
                "output.base_name must not be empty".into(),
            ));
        }
        if base.contains(['/', '\\']) {
            return Err(ConfigError::ValidationError(
                "output.base_name must be a file stem, not a path (use output.directory)".into(),
            ));
        }
        if OutputFormat::parse(&self.output.report_format).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "output.report_format must be 'json' or 'jsonl', got '{}'",
                self.output.report_format
            )));
        }
        Ok(())
    }
}
