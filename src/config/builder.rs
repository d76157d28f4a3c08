//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::alerts::AlertTarget;
use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist; without one, the default locations are
    /// searched and a missing file keeps the defaults.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override the default alert target
    pub fn with_default_target(mut self, target: Option<AlertTarget>) -> Self {
        if let Some(t) = target {
            self.config.general.default_target = t;
        }
        self
    }

    /// Override the email recipient
    pub fn with_recipient(mut self, recipient: Option<String>) -> Self {
        if let Some(r) = recipient {
            self.config.email.recipient = r;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
