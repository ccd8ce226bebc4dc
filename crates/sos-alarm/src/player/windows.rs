use async_trait::async_trait;

use super::{AlertPlayer, SoundCommand};
use crate::error::AlarmError;

// Five 1000 Hz beeps of 500 ms each.
const BEEP_SCRIPT: &str = "for ($i = 0; $i -lt 5; $i++) { [console]::beep(1000, 500) }";

/// Console tone generator driven through PowerShell.
#[derive(Debug, Clone)]
pub struct WindowsBeepPlayer {
    command: SoundCommand,
}

impl Default for WindowsBeepPlayer {
    fn default() -> Self {
        Self {
            command: SoundCommand::new(
                "powershell",
                &["-NoProfile", "-NonInteractive", "-Command", BEEP_SCRIPT],
            ),
        }
    }
}

#[async_trait]
impl AlertPlayer for WindowsBeepPlayer {
    async fn play_alert(&self) -> Result<(), AlarmError> {
        self.command.run().await
    }
}
