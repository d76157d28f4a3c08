//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.
//! Cooling limits are fixed; only the alert channels are configurable.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::alerts::{
    AlertChannel, AlertTarget, ControllerNotifier, EmailNotifier, DEFAULT_CONTROLLER_HEADER,
    DEFAULT_EMAIL_RECIPIENT,
};
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Email channel settings
    pub email: EmailConfig,
    /// Controller channel settings
    pub controller: ControllerConfig,
}

impl Config {
    /// Check values that TOML parsing alone cannot reject
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.email.recipient.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "email.recipient".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.email.recipient.contains('\n') {
            return Err(ConfigError::InvalidValue {
                key: "email.recipient".to_string(),
                message: "must be a single line".to_string(),
            });
        }
        if self.controller.header.is_empty() || self.controller.header.contains(char::is_whitespace)
        {
            return Err(ConfigError::InvalidValue {
                key: "controller.header".to_string(),
                message: "must be a non-empty word without whitespace".to_string(),
            });
        }
        Ok(())
    }

    /// Build the channel configured for a target
    pub fn channel(&self, target: AlertTarget) -> AlertChannel {
        match target {
            AlertTarget::ToEmail => AlertChannel::Email(self.email.to_notifier()),
            AlertTarget::ToController => AlertChannel::Controller(self.controller.to_notifier()),
        }
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Target used when none is given on the command line
    pub default_target: AlertTarget,
}

/// Email channel configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EmailConfig {
    /// Address placed in the `To:` line
    pub recipient: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_EMAIL_RECIPIENT.to_string(),
        }
    }
}

impl EmailConfig {
    pub fn to_notifier(&self) -> EmailNotifier {
        EmailNotifier::new(self.recipient.clone())
    }
}

/// Controller channel configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ControllerConfig {
    /// Header word preceding the breach code
    pub header: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            header: DEFAULT_CONTROLLER_HEADER.to_string(),
        }
    }
}

impl ControllerConfig {
    pub fn to_notifier(&self) -> ControllerNotifier {
        ControllerNotifier::new(self.header.clone())
    }
}
