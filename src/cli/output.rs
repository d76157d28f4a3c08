//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::{BreachType, CoolingConfig, CoolingType};
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Cooling limits entry for display
#[derive(Debug, Clone, Serialize)]
pub struct LimitsEntry {
    pub cooling: CoolingType,
    pub lower_limit: i32,
    pub upper_limit: i32,
}

impl LimitsEntry {
    pub fn new(cooling: CoolingType, config: CoolingConfig) -> Self {
        Self {
            cooling,
            lower_limit: config.lower_limit,
            upper_limit: config.upper_limit,
        }
    }
}

impl TableDisplay for LimitsEntry {
    fn to_table(&self) -> String {
        format!(
            "{:<12} {:>5}°C {:>5}°C",
            self.cooling.name(),
            self.lower_limit,
            self.upper_limit
        )
    }

    fn to_compact(&self) -> String {
        format!(
            "{}:{}..{}",
            self.cooling.name(),
            self.lower_limit,
            self.upper_limit
        )
    }
}

/// Cooling limits table for display
#[derive(Debug, Clone, Serialize)]
pub struct LimitsTable {
    pub limits: Vec<LimitsEntry>,
}

impl TableDisplay for LimitsTable {
    fn to_table(&self) -> String {
        let mut output = format!("{:<12} {:>7} {:>7}\n", "COOLING", "LOWER", "UPPER");
        for entry in &self.limits {
            output.push_str(&entry.to_table());
            output.push('\n');
        }
        output
    }

    fn to_compact(&self) -> String {
        self.limits
            .iter()
            .map(|e| e.to_compact())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Classification result for display
#[derive(Debug, Clone, Serialize)]
pub struct BreachReport {
    pub cooling: CoolingType,
    pub temperature: i32,
    pub lower_limit: i32,
    pub upper_limit: i32,
    pub breach: BreachType,
    pub code: u8,
}

impl TableDisplay for BreachReport {
    fn to_table(&self) -> String {
        format!(
            "Cooling:     {}\nTemperature: {}°C\nSafe range:  {}°C - {}°C\nBreach:      {} ({})",
            self.cooling,
            self.temperature,
            self.lower_limit,
            self.upper_limit,
            self.breach,
            self.code
        )
    }

    fn to_compact(&self) -> String {
        format!("{}:{}°C:{}", self.cooling, self.temperature, self.breach)
    }
}
