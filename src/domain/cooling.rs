//! Cooling domain types
//!
//! Provides the fixed cooling profiles and their safe temperature ranges.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Battery cooling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoolingType {
    /// No active cooling
    PassiveCooling = 0,
    /// High-capacity active cooling
    HiActiveCooling = 1,
    /// Medium-capacity active cooling
    MedActiveCooling = 2,
}

impl CoolingType {
    /// All cooling types, in table order
    pub const ALL: [CoolingType; 3] = [
        Self::PassiveCooling,
        Self::HiActiveCooling,
        Self::MedActiveCooling,
    ];

    /// Short name used on the command line and in config files
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PassiveCooling => "passive",
            Self::HiActiveCooling => "hi-active",
            Self::MedActiveCooling => "med-active",
        }
    }
}

impl fmt::Display for CoolingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CoolingType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "passive" | "passive-cooling" => Ok(Self::PassiveCooling),
            "hi-active" | "hi-active-cooling" => Ok(Self::HiActiveCooling),
            "med-active" | "med-active-cooling" => Ok(Self::MedActiveCooling),
            _ => Err(DomainError::UnknownCoolingType(s.to_string())),
        }
    }
}

impl TryFrom<u8> for CoolingType {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| DomainError::UnknownCoolingType(value.to_string()))
    }
}

/// Inclusive safe temperature range in Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoolingConfig {
    pub lower_limit: i32,
    pub upper_limit: i32,
}

impl CoolingConfig {
    /// Create a new range with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidLimits` unless `lower < upper`
    pub fn new(lower_limit: i32, upper_limit: i32) -> Result<Self, DomainError> {
        if lower_limit >= upper_limit {
            return Err(DomainError::InvalidLimits {
                lower: lower_limit,
                upper: upper_limit,
            });
        }
        Ok(Self {
            lower_limit,
            upper_limit,
        })
    }

    /// Check if a temperature lies within the range (bounds included)
    pub fn contains(&self, celsius: i32) -> bool {
        celsius >= self.lower_limit && celsius <= self.upper_limit
    }
}

impl fmt::Display for CoolingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C - {}°C", self.lower_limit, self.upper_limit)
    }
}

pub const PASSIVE_COOLING_LOWER_LIMIT: i32 = 0;
pub const PASSIVE_COOLING_UPPER_LIMIT: i32 = 35;
pub const HI_ACTIVE_COOLING_LOWER_LIMIT: i32 = 0;
pub const HI_ACTIVE_COOLING_UPPER_LIMIT: i32 = 45;
pub const MED_ACTIVE_COOLING_LOWER_LIMIT: i32 = 0;
pub const MED_ACTIVE_COOLING_UPPER_LIMIT: i32 = 40;

// Indexed by `CoolingType as usize`.
const COOLING_TABLE: [CoolingConfig; 3] = [
    CoolingConfig {
        lower_limit: PASSIVE_COOLING_LOWER_LIMIT,
        upper_limit: PASSIVE_COOLING_UPPER_LIMIT,
    },
    CoolingConfig {
        lower_limit: HI_ACTIVE_COOLING_LOWER_LIMIT,
        upper_limit: HI_ACTIVE_COOLING_UPPER_LIMIT,
    },
    CoolingConfig {
        lower_limit: MED_ACTIVE_COOLING_LOWER_LIMIT,
        upper_limit: MED_ACTIVE_COOLING_UPPER_LIMIT,
    },
];

/// Look up the safe temperature range for a cooling type
#[inline]
pub const fn get_cooling_config(cooling_type: CoolingType) -> CoolingConfig {
    COOLING_TABLE[cooling_type as usize]
}
