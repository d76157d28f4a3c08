//! Alert target selection

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where an alert is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AlertTarget {
    /// Machine-readable controller feed
    #[serde(rename = "controller")]
    ToController,
    /// Human-readable email
    #[default]
    #[serde(rename = "email")]
    ToEmail,
}

impl fmt::Display for AlertTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToController => write!(f, "controller"),
            Self::ToEmail => write!(f, "email"),
        }
    }
}

impl FromStr for AlertTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "controller" | "to_controller" | "to-controller" => Ok(Self::ToController),
            "email" | "to_email" | "to-email" => Ok(Self::ToEmail),
            _ => Err(DomainError::UnknownAlertTarget(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alert_target() {
        assert_eq!(
            "controller".parse::<AlertTarget>().unwrap(),
            AlertTarget::ToController
        );
        assert_eq!("TO_EMAIL".parse::<AlertTarget>().unwrap(), AlertTarget::ToEmail);
    }

    #[test]
    fn test_parse_unknown_alert_target() {
        assert_eq!(
            "pager".parse::<AlertTarget>(),
            Err(DomainError::UnknownAlertTarget("pager".to_string()))
        );
    }

    #[test]
    fn test_default_target_is_email() {
        assert_eq!(AlertTarget::default(), AlertTarget::ToEmail);
    }
}
