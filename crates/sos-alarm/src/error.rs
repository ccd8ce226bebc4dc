use std::process::ExitStatus;

use thiserror::Error;

/// Failures raised by the sound and notification collaborators.
///
/// None of these are fatal: [`crate::Alarm`] logs them and moves on.
#[derive(Error, Debug)]
pub enum AlarmError {
    /// The sound utility could not be started at all.
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The sound utility ran but reported failure.
    #[error("{program} exited with {status}")]
    ExitStatus { program: String, status: ExitStatus },

    /// The desktop notification could not be shown.
    #[error("Notification failed: {0}")]
    Notification(String),

    /// A collaborator task panicked or was cancelled.
    #[error("Alarm task failed: {0}")]
    Join(String),
}
