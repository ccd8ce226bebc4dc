use async_trait::async_trait;

use super::{AlertPlayer, SoundCommand};
use crate::error::AlarmError;

const ALARM_SOUND: &str = "/System/Library/Sounds/Alarm.aiff";

/// Plays the system alarm sound with `afplay`.
#[derive(Debug, Clone)]
pub struct MacAlertPlayer {
    command: SoundCommand,
}

impl Default for MacAlertPlayer {
    fn default() -> Self {
        Self {
            command: SoundCommand::new("afplay", &[ALARM_SOUND]),
        }
    }
}

#[async_trait]
impl AlertPlayer for MacAlertPlayer {
    async fn play_alert(&self) -> Result<(), AlarmError> {
        self.command.run().await
    }
}
