//! Desktop notification collaborator.

use notify_rust::{Notification, Timeout};

use crate::error::AlarmError;

const SUMMARY: &str = "SOS ALARM";
const APP_NAME: &str = "SOS Server";
const TIMEOUT_MS: u32 = 10_000;

/// Shows a notification for an SOS message.
///
/// Implementations may block; [`crate::Alarm`] calls them from the blocking pool.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> Result<(), AlarmError>;
}

/// Native desktop notification through notify-rust.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) -> Result<(), AlarmError> {
        Notification::new()
            .summary(SUMMARY)
            .body(&notification_body(message))
            .appname(APP_NAME)
            .timeout(Timeout::Milliseconds(TIMEOUT_MS))
            .show()
            .map(|_| ())
            .map_err(|e| AlarmError::Notification(e.to_string()))
    }
}

/// Notifier that only logs. Used when notifications are switched off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, message: &str) -> Result<(), AlarmError> {
        tracing::debug!("Notifications disabled, skipping: {}", message);
        Ok(())
    }
}

fn notification_body(message: &str) -> String {
    format!("ALARM: {message}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_body_prefix() {
        assert_eq!(notification_body("fire in B block"), "ALARM: fire in B block");
    }

    #[test]
    fn test_noop_notifier_succeeds() {
        assert!(NoopNotifier.notify("anything").is_ok());
    }
}
