//! Breach classification
//!
//! Compares temperature readings against safe ranges.

use super::cooling::{get_cooling_config, CoolingType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing a reading with its safe range
///
/// The discriminants are part of the controller feed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BreachType {
    /// Within range (bounds included)
    Normal = 0,
    /// Below the lower limit
    TooLow = 1,
    /// Above the upper limit
    TooHigh = 2,
}

impl BreachType {
    /// Numeric code reported to the controller
    #[inline]
    pub const fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Check if the reading is outside its range
    pub fn is_breach(&self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for BreachType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::TooLow => write!(f, "TOO_LOW"),
            Self::TooHigh => write!(f, "TOO_HIGH"),
        }
    }
}

impl From<BreachType> for u8 {
    fn from(breach: BreachType) -> Self {
        breach.ordinal()
    }
}

/// Classify a value against an inclusive `[lower_limit, upper_limit]` range
pub fn infer_breach(value: i32, lower_limit: i32, upper_limit: i32) -> BreachType {
    if value < lower_limit {
        BreachType::TooLow
    } else if value > upper_limit {
        BreachType::TooHigh
    } else {
        BreachType::Normal
    }
}

/// Classify a temperature against the safe range of a cooling type
pub fn classify_temperature_breach(cooling_type: CoolingType, temperature: i32) -> BreachType {
    let config = get_cooling_config(cooling_type);
    let breach = infer_breach(temperature, config.lower_limit, config.upper_limit);
    log::debug!(
        "{}°C with {} cooling ({}) -> {}",
        temperature,
        cooling_type,
        config,
        breach
    );
    breach
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_breach_too_low() {
        assert_eq!(infer_breach(10, 20, 30), BreachType::TooLow);
    }

    #[test]
    fn test_infer_breach_too_high() {
        assert_eq!(infer_breach(40, 20, 30), BreachType::TooHigh);
    }

    #[test]
    fn test_infer_breach_normal() {
        assert_eq!(infer_breach(25, 20, 30), BreachType::Normal);
    }

    #[test]
    fn test_infer_breach_bounds_are_normal() {
        assert_eq!(infer_breach(20, 20, 30), BreachType::Normal);
        assert_eq!(infer_breach(30, 20, 30), BreachType::Normal);
        assert_eq!(infer_breach(19, 20, 30), BreachType::TooLow);
        assert_eq!(infer_breach(31, 20, 30), BreachType::TooHigh);
    }

    #[test]
    fn test_infer_breach_degenerate_range() {
        assert_eq!(infer_breach(5, 5, 5), BreachType::Normal);
        assert_eq!(infer_breach(i32::MIN, 5, 5), BreachType::TooLow);
        assert_eq!(infer_breach(i32::MAX, 5, 5), BreachType::TooHigh);
    }

    #[test]
    fn test_infer_breach_matches_range_membership() {
        let (lo, hi) = (-10, 10);
        for v in -30..=30 {
            let expected = if v < lo {
                BreachType::TooLow
            } else if v > hi {
                BreachType::TooHigh
            } else {
                BreachType::Normal
            };
            assert_eq!(infer_breach(v, lo, hi), expected, "value {}", v);
        }
    }

    #[test]
    fn test_classify_passive_cooling() {
        let cooling = CoolingType::PassiveCooling;
        assert_eq!(classify_temperature_breach(cooling, 50), BreachType::TooHigh);
        assert_eq!(classify_temperature_breach(cooling, -5), BreachType::TooLow);
        assert_eq!(classify_temperature_breach(cooling, 20), BreachType::Normal);
    }

    #[test]
    fn test_classify_hi_active_cooling() {
        let cooling = CoolingType::HiActiveCooling;
        assert_eq!(classify_temperature_breach(cooling, 60), BreachType::TooHigh);
        assert_eq!(classify_temperature_breach(cooling, -5), BreachType::TooLow);
        assert_eq!(classify_temperature_breach(cooling, 30), BreachType::Normal);
    }

    #[test]
    fn test_classify_med_active_cooling() {
        let cooling = CoolingType::MedActiveCooling;
        assert_eq!(classify_temperature_breach(cooling, 45), BreachType::TooHigh);
        assert_eq!(classify_temperature_breach(cooling, -5), BreachType::TooLow);
        assert_eq!(classify_temperature_breach(cooling, 30), BreachType::Normal);
    }

    #[test]
    fn test_breach_ordinals() {
        assert_eq!(BreachType::Normal.ordinal(), 0);
        assert_eq!(BreachType::TooLow.ordinal(), 1);
        assert_eq!(u8::from(BreachType::TooHigh), 2);
    }

    #[test]
    fn test_is_breach() {
        assert!(!BreachType::Normal.is_breach());
        assert!(BreachType::TooLow.is_breach());
        assert!(BreachType::TooHigh.is_breach());
    }
}
