//! battery-alert - battery temperature alert tool
//!
//! A command-line tool for classifying battery temperatures against
//! cooling-specific limits and sending email or controller alerts.

use battery_alert::cli::args::{generate_completions, Cli, Commands};
use battery_alert::commands::{run_check, run_classify, run_limits};
use battery_alert::config::ConfigBuilder;
use battery_alert::error::{AppError, ConfigError, DomainError};
use clap::Parser;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging, verbose flag raises the level to debug
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    logger.format_timestamp(None);
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Check(args) => {
            let config = ConfigBuilder::new()
                .with_file(cli.config.as_deref())?
                .with_default_target(args.target)
                .with_recipient(args.recipient.clone())
                .build()?;

            run_check(args, &config)
        }

        Commands::Classify(args) => run_classify(args, cli.format),

        Commands::Limits(args) => run_limits(args, cli.format),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Domain(DomainError::UnknownCoolingType(_)) => {
            eprintln!();
            eprintln!("Hint: Run 'battery-alert limits' to see the known cooling types.");
        }
        AppError::Config(ConfigError::FileNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: Pass --config with an existing file, or unset BATTERY_ALERT_CONFIG.");
        }
        _ => {}
    }
}
