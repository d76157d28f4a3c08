//! Check command implementation
//!
//! Classifies a reading and sends the alert to stdout.

use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::domain::BatteryCharacter;
use crate::error::Result;
use crate::services::AlertChecker;
use std::io;

/// Execute the check command
pub fn run_check(args: &CheckArgs, config: &Config) -> Result<()> {
    let target = args.target.unwrap_or(config.general.default_target);
    let battery = BatteryCharacter::new(args.cooling, args.label.clone());
    let checker = AlertChecker::new(config);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let breach = checker.check_and_alert(&mut handle, target, &battery, args.temperature)?;

    if breach.is_breach() {
        log::info!("{} reported {} at {}°C", battery, breach, args.temperature);
    }

    Ok(())
}
