use async_trait::async_trait;
use tracing::debug;

use super::{AlertPlayer, SoundCommand};
use crate::error::AlarmError;

const ALARM_SOUND: &str = "/usr/share/sounds/freedesktop/stereo/alarm-clock-elapsed.oga";

/// PulseAudio sound file, falling back to the PC speaker `beep` utility.
#[derive(Debug, Clone)]
pub struct LinuxAlertPlayer {
    primary: SoundCommand,
    fallback: SoundCommand,
}

impl LinuxAlertPlayer {
    pub fn new(primary: SoundCommand, fallback: SoundCommand) -> Self {
        Self { primary, fallback }
    }
}

impl Default for LinuxAlertPlayer {
    fn default() -> Self {
        Self::new(
            SoundCommand::new("paplay", &[ALARM_SOUND]),
            SoundCommand::new("beep", &["-f", "1000", "-l", "500", "-r", "5"]),
        )
    }
}

#[async_trait]
impl AlertPlayer for LinuxAlertPlayer {
    async fn play_alert(&self) -> Result<(), AlarmError> {
        match self.primary.run().await {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!("{} failed ({}), trying {}", self.primary.program(), e, self.fallback.program());
                self.fallback.run().await
            }
        }
    }
}
