//! Alert sound playback, one implementation per host platform.

mod command;
#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AlarmError;

pub use command::SoundCommand;
#[cfg(target_os = "linux")]
pub use linux::LinuxAlertPlayer;
#[cfg(target_os = "macos")]
pub use macos::MacAlertPlayer;
#[cfg(target_os = "windows")]
pub use windows::WindowsBeepPlayer;

/// Plays an audible alert.
///
/// Implementations must terminate on their own (fixed repeat count or a
/// fixed-length sound); callers never cancel or time them out.
#[async_trait]
pub trait AlertPlayer: Send + Sync {
    async fn play_alert(&self) -> Result<(), AlarmError>;
}

/// Player for hosts without a known sound mechanism, or with sound disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

#[async_trait]
impl AlertPlayer for SilentPlayer {
    async fn play_alert(&self) -> Result<(), AlarmError> {
        tracing::debug!("Alert sound skipped");
        Ok(())
    }
}

/// Returns the player for the platform this binary was built for.
pub fn default_player() -> Arc<dyn AlertPlayer> {
    #[cfg(target_os = "linux")]
    {
        Arc::new(LinuxAlertPlayer::default())
    }
    #[cfg(target_os = "macos")]
    {
        Arc::new(MacAlertPlayer::default())
    }
    #[cfg(target_os = "windows")]
    {
        Arc::new(WindowsBeepPlayer::default())
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        Arc::new(SilentPlayer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_silent_player_succeeds() {
        assert!(SilentPlayer.play_alert().await.is_ok());
    }
}
