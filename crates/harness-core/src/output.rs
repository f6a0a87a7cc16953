//! Captured output of a completed command

use std::process::Output;

/// Exit status and captured streams of a completed command
///
/// Targets return this for structurally successful runs (zero exit); the
/// same fields travel inside errors for failed runs so callers and log
/// lines can inspect what the command printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exit status code
    pub status: i32,

    /// Captured standard output (empty when capture was off)
    pub stdout: Vec<u8>,

    /// Captured standard error (empty when capture was off)
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn new(status: i32, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            status,
            stdout,
            stderr,
        }
    }

    /// Standard output decoded lossily as UTF-8
    pub fn stdout_str(&self) -> String {
        String::from_utf8_lossy(&self.stdout).to_string()
    }

    /// Standard error decoded lossily as UTF-8
    pub fn stderr_str(&self) -> String {
        String::from_utf8_lossy(&self.stderr).to_string()
    }

    /// True when the command exited zero
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        // A signal-terminated process has no exit code; fold it into -1 so
        // the status still reads as a failure.
        Self {
            status: output.status.code().unwrap_or(-1),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}
