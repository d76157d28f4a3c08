//! Classify command implementation
//!
//! Reports the breach classification without sending an alert.

use crate::cli::args::{ClassifyArgs, OutputFormat};
use crate::cli::output::{print_output, BreachReport};
use crate::domain::{classify_temperature_breach, get_cooling_config};
use crate::error::Result;

/// Execute the classify command
pub fn run_classify(args: &ClassifyArgs, format: OutputFormat) -> Result<()> {
    let config = get_cooling_config(args.cooling);
    let breach = classify_temperature_breach(args.cooling, args.temperature);

    let report = BreachReport {
        cooling: args.cooling,
        temperature: args.temperature,
        lower_limit: config.lower_limit,
        upper_limit: config.upper_limit,
        breach,
        code: breach.ordinal(),
    };

    print_output(&report, format)?;

    Ok(())
}
