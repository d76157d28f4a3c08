//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod check;
pub mod classify;
pub mod limits;

pub use check::run_check;
pub use classify::run_classify;
pub use limits::run_limits;
