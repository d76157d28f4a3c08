//! Domain models for battery-alert
//!
//! Cooling profiles, breach classification and battery descriptions.
//! Types parsed from untyped input are validated on construction (fail-fast pattern).

pub mod battery;
pub mod breach;
pub mod cooling;

pub use battery::BatteryCharacter;
pub use breach::{classify_temperature_breach, infer_breach, BreachType};
pub use cooling::{get_cooling_config, CoolingConfig, CoolingType};
