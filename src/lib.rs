//! battery-alert - battery temperature alerting library
//!
//! This library classifies battery temperature readings against the safe range
//! of the battery's cooling type and sends the result to an alert channel.
//!
//! # Modules
//!
//! - [`alerts`]: Alert targets and notification channels
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Cooling profiles and breach classification
//! - [`error`]: Error types
//! - [`services`]: Alert checking

pub mod alerts;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use error::{AppError, Result};
