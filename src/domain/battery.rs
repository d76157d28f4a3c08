//! Battery description

use super::cooling::CoolingType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A battery and the cooling it is fitted with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatteryCharacter {
    pub cooling_type: CoolingType,
    /// Free-form brand or label, not used for classification
    pub label: String,
}

impl BatteryCharacter {
    pub fn new(cooling_type: CoolingType, label: impl Into<String>) -> Self {
        Self {
            cooling_type,
            label: label.into(),
        }
    }
}

impl fmt::Display for BatteryCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "battery ({} cooling)", self.cooling_type)
        } else {
            write!(f, "{} ({} cooling)", self.label, self.cooling_type)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_display() {
        let battery = BatteryCharacter::new(CoolingType::HiActiveCooling, "Battery 2");
        assert_eq!(battery.to_string(), "Battery 2 (hi-active cooling)");

        let unlabeled = BatteryCharacter::new(CoolingType::PassiveCooling, "");
        assert_eq!(unlabeled.to_string(), "battery (passive cooling)");
    }
}
