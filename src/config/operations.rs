//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::MAX_LINE_NUMBER_WIDTH;
use crate::error::{DiffViewError, Result};
use crate::render::RenderOptions;
use std::path::Path;

/// File name looked up by [`Config::discover`].
pub const CONFIG_FILE_NAME: &str = ".refinex-diff.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffViewError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffViewError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        log::debug!("loaded config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Load `.refinex-diff.yaml` from `dir` if it exists, else the defaults.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            log::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.as_ref().display());
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            DiffViewError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DiffViewError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `empty_text` must contain something other than whitespace
    /// - `line_number_width` must be between 1 and 10
    pub fn validate(&self) -> Result<()> {
        if self.empty_text.trim().is_empty() {
            return Err(DiffViewError::UserError(
                "config validation failed: empty_text must not be blank".to_string(),
            ));
        }

        if self.line_number_width == 0 || self.line_number_width > MAX_LINE_NUMBER_WIDTH {
            return Err(DiffViewError::UserError(format!(
                "config validation failed: line_number_width must be between 1 and {} (found {})",
                MAX_LINE_NUMBER_WIDTH, self.line_number_width
            )));
        }

        Ok(())
    }

    /// Display options derived from this config.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_header: self.show_header,
            empty_text: self.empty_text.clone(),
            line_number_width: self.line_number_width,
        }
    }
}
