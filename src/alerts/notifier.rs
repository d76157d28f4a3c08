//! Alert notification channels
//!
//! Provides the email and controller channels. Both are simulated: they render
//! the message and write it to a caller-supplied stream.

use super::target::AlertTarget;
use crate::domain::BreachType;
use crate::error::Result;
use std::io::Write;

/// Recipient used when no configuration overrides it
pub const DEFAULT_EMAIL_RECIPIENT: &str = "a.b@c.com";

/// Controller feed header used when no configuration overrides it
pub const DEFAULT_CONTROLLER_HEADER: &str = "feed";

/// Notification channel trait
pub trait Notifier: Send + Sync {
    /// Render the message for a breach classification
    fn format(&self, breach: BreachType) -> String;

    /// Channel name for identification
    fn name(&self) -> &str;

    /// Write the rendered message to `out`
    fn notify(&self, out: &mut dyn Write, breach: BreachType) -> Result<()> {
        out.write_all(self.format(breach).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// Simulated email channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailNotifier {
    recipient: String,
}

impl EmailNotifier {
    /// Create an email notifier for the given recipient
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

impl Default for EmailNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_RECIPIENT)
    }
}

impl Notifier for EmailNotifier {
    fn format(&self, breach: BreachType) -> String {
        let mut message = format!("To: {}\n", self.recipient);
        match breach {
            BreachType::TooLow => message.push_str("Hi, the temperature is too low\n"),
            BreachType::TooHigh => message.push_str("Hi, the temperature is too high\n"),
            BreachType::Normal => {}
        }
        message
    }

    fn name(&self) -> &str {
        "email"
    }
}

/// Simulated controller feed
///
/// Emits `<header> : <ordinal>` per alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerNotifier {
    header: String,
}

impl ControllerNotifier {
    /// Create a controller notifier with the given feed header
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }
}

impl Default for ControllerNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_CONTROLLER_HEADER)
    }
}

impl Notifier for ControllerNotifier {
    fn format(&self, breach: BreachType) -> String {
        format!("{} : {}\n", self.header, breach.ordinal())
    }

    fn name(&self) -> &str {
        "controller"
    }
}

/// One of the supported output strategies, selected by [`AlertTarget`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertChannel {
    Email(EmailNotifier),
    Controller(ControllerNotifier),
}

impl AlertChannel {
    /// Channel with default settings for a target
    pub fn for_target(target: AlertTarget) -> Self {
        match target {
            AlertTarget::ToEmail => Self::Email(EmailNotifier::default()),
            AlertTarget::ToController => Self::Controller(ControllerNotifier::default()),
        }
    }

    /// Target this channel serves
    pub fn target(&self) -> AlertTarget {
        match self {
            Self::Email(_) => AlertTarget::ToEmail,
            Self::Controller(_) => AlertTarget::ToController,
        }
    }
}

impl Notifier for AlertChannel {
    fn format(&self, breach: BreachType) -> String {
        match self {
            Self::Email(n) => n.format(breach),
            Self::Controller(n) => n.format(breach),
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::Email(n) => n.name(),
            Self::Controller(n) => n.name(),
        }
    }
}

/// Send an email alert for a breach using the default recipient
pub fn send_to_email<W: Write>(out: &mut W, breach: BreachType) -> Result<()> {
    EmailNotifier::default().notify(out, breach)
}

/// Send a controller feed entry for a breach using the default header
pub fn send_to_controller<W: Write>(out: &mut W, breach: BreachType) -> Result<()> {
    ControllerNotifier::default().notify(out, breach)
}
