//! Execution targets
//!
//! A [`Target`] is a destination a command can be executed against: the
//! local process environment, or a remote/managed test instance provided by
//! the surrounding harness. The only implementation shipped here is
//! [`LocalRunner`]; remote substrates implement the trait on their side of
//! the seam.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Error, Result};
use crate::output::CommandOutput;

/// Options for a single command execution
#[derive(Debug, Clone, Default)]
pub struct ExecOptions {
    /// Capture stdout/stderr instead of inheriting the parent's streams
    pub capture: bool,

    /// Working directory for the command
    pub cwd: Option<PathBuf>,

    /// Extra environment variables for the command
    pub env: Vec<(String, String)>,
}

impl ExecOptions {
    /// Options with output capture enabled
    pub fn captured() -> Self {
        Self {
            capture: true,
            ..Self::default()
        }
    }
}

/// An execution destination for commands
///
/// A structurally successful run (zero exit) returns the completed output.
/// A non-zero exit returns [`Error::CommandFailed`] carrying the status and
/// captured streams; failure to run the command at all returns
/// [`Error::Spawn`]. Both follow the same retry path in the executor.
pub trait Target {
    /// Run `args` to completion and return its captured output
    fn exec(&self, args: &[&str], opts: &ExecOptions) -> Result<CommandOutput>;
}

/// Target implementation that runs commands as local child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRunner;

impl LocalRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Target for LocalRunner {
    fn exec(&self, args: &[&str], opts: &ExecOptions) -> Result<CommandOutput> {
        let (program, rest) = args.split_first().ok_or(Error::EmptyCommand)?;
        let command = args.join(" ");
        debug!("Execute command `{}` (capture={})", command, opts.capture);

        let mut cmd = Command::new(program);
        cmd.args(rest);
        if let Some(cwd) = &opts.cwd {
            cmd.current_dir(cwd);
        }
        for (key, value) in &opts.env {
            cmd.env(key, value);
        }

        let output: CommandOutput = if opts.capture {
            cmd.output()
                .map_err(|e| Error::spawn(command.as_str(), e))?
                .into()
        } else {
            let status = cmd
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit())
                .status()
                .map_err(|e| Error::spawn(command.as_str(), e))?;
            CommandOutput::new(status.code().unwrap_or(-1), Vec::new(), Vec::new())
        };

        if !output.success() {
            return Err(Error::command_failed(command, output));
        }
        Ok(output)
    }
}

/// Log and run a command locally, with output capture and non-zero exit
/// treated as failure.
pub fn run<S: AsRef<str>>(args: &[S]) -> Result<CommandOutput> {
    let argv: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    LocalRunner.exec(&argv, &ExecOptions::captured())
}
