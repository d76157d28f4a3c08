//! Limits command implementation
//!
//! Lists the safe temperature range of each cooling type.

use crate::cli::args::{LimitsArgs, OutputFormat};
use crate::cli::output::{print_output, LimitsEntry, LimitsTable};
use crate::domain::{get_cooling_config, CoolingType};
use crate::error::Result;

/// Execute the limits command
pub fn run_limits(args: &LimitsArgs, format: OutputFormat) -> Result<()> {
    let limits = match args.cooling {
        Some(cooling) => vec![LimitsEntry::new(cooling, get_cooling_config(cooling))],
        None => CoolingType::ALL
            .iter()
            .map(|c| LimitsEntry::new(*c, get_cooling_config(*c)))
            .collect(),
    };

    print_output(&LimitsTable { limits }, format)?;

    Ok(())
}
