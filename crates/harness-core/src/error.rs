//! Error types for harness-core

use thiserror::Error;

use crate::output::CommandOutput;

/// Result type alias using harness-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of attempt failure, used by retry policies to decide
/// whether a failed attempt may be retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The command ran to completion but exited non-zero
    Execution,

    /// The command could not be run at all (spawn error, transport error)
    Transport,

    /// The command exited zero but the success condition rejected its output
    Condition,
}

/// Errors produced while executing a command against a target
#[derive(Error, Debug)]
pub enum Error {
    /// Command completed with a non-zero exit status
    #[error("command `{command}` exited with status {status}")]
    CommandFailed {
        command: String,
        status: i32,
        stdout: Vec<u8>,
        stderr: Vec<u8>,
    },

    /// Command could not be spawned or the target transport failed
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Command exited zero but the caller's success condition returned false
    #[error("condition not met")]
    ConditionNotMet { output: CommandOutput },

    /// An empty argument vector was passed to a runner
    #[error("empty command")]
    EmptyCommand,
}

impl Error {
    /// Create a command failure from a completed output
    pub fn command_failed(command: impl Into<String>, output: CommandOutput) -> Self {
        Self::CommandFailed {
            command: command.into(),
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }

    /// Create a spawn/transport failure
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a condition failure carrying the structurally-successful output
    pub fn condition_not_met(output: CommandOutput) -> Self {
        Self::ConditionNotMet { output }
    }

    /// The failure category this error belongs to
    pub fn kind(&self) -> FailureKind {
        match self {
            Error::CommandFailed { .. } => FailureKind::Execution,
            Error::Spawn { .. } | Error::EmptyCommand => FailureKind::Transport,
            Error::ConditionNotMet { .. } => FailureKind::Condition,
        }
    }

    /// Check if this is a condition failure
    pub fn is_condition_failure(&self) -> bool {
        self.kind() == FailureKind::Condition
    }

    /// The captured output carried by this error, if any
    pub fn output(&self) -> Option<CommandOutput> {
        match self {
            Error::CommandFailed {
                status,
                stdout,
                stderr,
                ..
            } => Some(CommandOutput {
                status: *status,
                stdout: stdout.clone(),
                stderr: stderr.clone(),
            }),
            Error::ConditionNotMet { output } => Some(output.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kinds() {
        let failed = Error::command_failed("false", CommandOutput::new(1, vec![], vec![]));
        assert_eq!(failed.kind(), FailureKind::Execution);

        let spawn = Error::spawn(
            "no-such-binary",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(spawn.kind(), FailureKind::Transport);

        let cond = Error::condition_not_met(CommandOutput::new(0, b"NotReady".to_vec(), vec![]));
        assert_eq!(cond.kind(), FailureKind::Condition);
        assert!(cond.is_condition_failure());
    }

    #[test]
    fn test_condition_failure_keeps_output() {
        let err = Error::condition_not_met(CommandOutput::new(0, b"NotReady".to_vec(), vec![]));
        let out = err.output().unwrap();
        assert_eq!(out.status, 0);
        assert_eq!(out.stdout_str(), "NotReady");
    }

    #[test]
    fn test_display() {
        let err = Error::command_failed("kubectl get nodes", CommandOutput::new(2, vec![], vec![]));
        let display = format!("{}", err);
        assert!(display.contains("kubectl get nodes"));
        assert!(display.contains("status 2"));
    }
}
