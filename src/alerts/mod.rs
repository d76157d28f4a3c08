//! Alert dispatch
//!
//! Provides the alert targets and their notification channels.

mod notifier;
mod target;

pub use notifier::{
    send_to_controller, send_to_email, AlertChannel, ControllerNotifier, EmailNotifier, Notifier,
    DEFAULT_CONTROLLER_HEADER, DEFAULT_EMAIL_RECIPIENT,
};
pub use target::AlertTarget;
