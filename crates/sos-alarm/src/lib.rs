//! Alarm collaborators for the SOS server.
//!
//! This crate owns the two local side effects of an SOS signal:
//!
//! - [`AlertPlayer`]: plays an audible alert using whatever the host offers
//! - [`Notifier`]: shows a transient desktop notification
//! - [`Alarm`]: combines both and fires them for a single message
//!
//! # Example
//!
//! ```rust,no_run
//! use sos_alarm::Alarm;
//!
//! # async fn run() {
//! let alarm = Alarm::platform_default();
//! alarm.trigger("Medical emergency near Lab 201").await;
//! # }
//! ```

mod alarm;
mod error;
mod notifier;
mod player;

pub use alarm::Alarm;
pub use error::AlarmError;
pub use notifier::{DesktopNotifier, NoopNotifier, Notifier};
pub use player::{default_player, AlertPlayer, SilentPlayer, SoundCommand};

#[cfg(target_os = "linux")]
pub use player::LinuxAlertPlayer;
#[cfg(target_os = "macos")]
pub use player::MacAlertPlayer;
#[cfg(target_os = "windows")]
pub use player::WindowsBeepPlayer;
