//! Alert checker
//!
//! Classifies a battery reading and dispatches the result to the selected channel.

use crate::alerts::{AlertChannel, AlertTarget, Notifier};
use crate::config::Config;
use crate::domain::{classify_temperature_breach, BatteryCharacter, BreachType};
use crate::error::Result;
use std::io::Write;

/// Alert checker holding the configured channels
#[derive(Debug, Clone)]
pub struct AlertChecker {
    email: AlertChannel,
    controller: AlertChannel,
}

impl AlertChecker {
    /// Create a checker using the channels from a configuration
    pub fn new(config: &Config) -> Self {
        Self {
            email: config.channel(AlertTarget::ToEmail),
            controller: config.channel(AlertTarget::ToController),
        }
    }

    /// Channel serving a target
    pub fn channel(&self, target: AlertTarget) -> &AlertChannel {
        match target {
            AlertTarget::ToEmail => &self.email,
            AlertTarget::ToController => &self.controller,
        }
    }

    /// Classify `temperature` for `battery` and send the alert to `target`
    ///
    /// The classification is returned after the alert is written.
    pub fn check_and_alert(
        &self,
        out: &mut dyn Write,
        target: AlertTarget,
        battery: &BatteryCharacter,
        temperature: i32,
    ) -> Result<BreachType> {
        let breach = classify_temperature_breach(battery.cooling_type, temperature);
        let channel = self.channel(target);

        log::info!(
            "Sending {} alert for {} at {}°C via {}",
            breach,
            battery,
            temperature,
            channel.name()
        );

        channel.notify(out, breach)?;
        Ok(breach)
    }
}

impl Default for AlertChecker {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Classify a reading and alert through the default channels
pub fn check_and_alert<W: Write>(
    out: &mut W,
    target: AlertTarget,
    battery: &BatteryCharacter,
    temperature: i32,
) -> Result<BreachType> {
    AlertChecker::default().check_and_alert(out, target, battery, temperature)
}
