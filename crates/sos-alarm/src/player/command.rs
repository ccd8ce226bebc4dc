use std::process::Stdio;

use tokio::process::Command;

use crate::error::AlarmError;

/// An external program invocation that produces a sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCommand {
    program: String,
    args: Vec<String>,
}

impl SoundCommand {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Runs the program to completion with its output discarded.
    pub async fn run(&self) -> Result<(), AlarmError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|source| AlarmError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(AlarmError::ExitStatus {
                program: self.program.clone(),
                status,
            });
        }
        Ok(())
    }
}
