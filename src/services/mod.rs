//! Business logic services
//!
//! Services compose the domain lookups with alert dispatch.

pub mod alert_checker;

pub use alert_checker::{check_and_alert, AlertChecker};
