//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::alerts::AlertTarget;
use crate::domain::CoolingType;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Battery temperature alert tool
///
/// Classify battery temperatures against cooling-specific limits and send alerts.
#[derive(Parser, Debug)]
#[command(name = "battery-alert")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "BATTERY_ALERT_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a reading and send the alert
    Check(CheckArgs),

    /// Classify a reading without sending an alert
    Classify(ClassifyArgs),

    /// Show the temperature limits of each cooling type
    Limits(LimitsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Cooling type (passive, hi-active, med-active)
    #[arg(long)]
    pub cooling: CoolingType,

    /// Alert target (controller, email); defaults to the configured target
    #[arg(short, long)]
    pub target: Option<AlertTarget>,

    /// Battery label
    #[arg(short, long, default_value = "")]
    pub label: String,

    /// Override the email recipient
    #[arg(long)]
    pub recipient: Option<String>,

    /// Temperature in Celsius
    #[arg(allow_negative_numbers = true)]
    pub temperature: i32,
}

/// Arguments for the classify command
#[derive(Parser, Debug)]
pub struct ClassifyArgs {
    /// Cooling type (passive, hi-active, med-active)
    #[arg(long)]
    pub cooling: CoolingType,

    /// Temperature in Celsius
    #[arg(allow_negative_numbers = true)]
    pub temperature: i32,
}

/// Arguments for the limits command
#[derive(Parser, Debug)]
pub struct LimitsArgs {
    /// Only show this cooling type
    #[arg(long)]
    pub cooling: Option<CoolingType>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_check() {
        let args = Cli::try_parse_from([
            "battery-alert",
            "check",
            "--cooling",
            "passive",
            "--target",
            "controller",
            "--label",
            "Battery 1",
            "50",
        ])
        .unwrap();

        if let Commands::Check(check) = args.command {
            assert_eq!(check.cooling, CoolingType::PassiveCooling);
            assert_eq!(check.target, Some(AlertTarget::ToController));
            assert_eq!(check.label, "Battery 1");
            assert_eq!(check.temperature, 50);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_negative_temperature() {
        let args =
            Cli::try_parse_from(["battery-alert", "check", "--cooling", "hi-active", "-5"])
                .unwrap();
        if let Commands::Check(check) = args.command {
            assert_eq!(check.temperature, -5);
            assert_eq!(check.target, None);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_cooling() {
        let result = Cli::try_parse_from(["battery-alert", "classify", "--cooling", "liquid", "20"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_target() {
        let result = Cli::try_parse_from([
            "battery-alert",
            "check",
            "--cooling",
            "passive",
            "--target",
            "pager",
            "20",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_limits() {
        let args = Cli::try_parse_from(["battery-alert", "--format", "json", "limits"]).unwrap();
        assert!(matches!(args.format, OutputFormat::Json));
        assert!(matches!(args.command, Commands::Limits(LimitsArgs { cooling: None })));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let args = Cli::try_parse_from(["battery-alert", "-v", "limits"]).unwrap();
        assert!(args.verbose);
    }
}
