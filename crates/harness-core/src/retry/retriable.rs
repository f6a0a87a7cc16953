//! Retriable command execution sessions

use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::output::CommandOutput;
use crate::retry::policy::{RetryOn, RetryPolicy};
use crate::target::{ExecOptions, LocalRunner, Target};

/// Predicate evaluated against a structurally successful command output
pub type Condition<'t> = Box<dyn Fn(&CommandOutput) -> bool + 't>;

/// Retry a command for a while.
///
/// By default, retry immediately and forever until the command succeeds.
///
/// Some commands need to execute until they pass some condition:
///
/// ```no_run
/// # use harness_core::stubbornly;
/// # use std::time::Duration;
/// let out = stubbornly()
///     .retries(15)
///     .delay(Duration::from_secs(5))
///     .until(|p| p.stdout_str().contains(" Ready"))
///     .exec(&["k8s", "kubectl", "get", "node", "node-1", "--no-headers"])?;
/// # Ok::<(), harness_core::Error>(())
/// ```
///
/// Some commands just need to execute until they complete:
///
/// ```no_run
/// # use harness_core::stubbornly;
/// stubbornly().retries(5).exec(&["k8s", "x-wait-for", "dns"])?;
/// # Ok::<(), harness_core::Error>(())
/// ```
///
/// The default policy has no attempt bound and no delay, so a persistently
/// failing command busy-spins; bound callers set both `retries` and `delay`.
pub fn stubbornly() -> Retriable<'static> {
    Retriable::new(RetryPolicy::default())
}

/// A single retried command execution: target binding, optional success
/// condition, and the governing [`RetryPolicy`]. Built fluently and
/// consumed by [`exec`](Retriable::exec).
pub struct Retriable<'t> {
    policy: RetryPolicy,
    target: Option<&'t dyn Target>,
    condition: Option<Condition<'t>>,
}

impl<'t> Retriable<'t> {
    /// Create a session governed by the given policy
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            target: None,
            condition: None,
        }
    }

    /// Stop after at most `retries` attempts (default: unlimited)
    pub fn retries(mut self, retries: u32) -> Self {
        self.policy.max_attempts = Some(retries);
        self
    }

    /// Wait `delay` between attempts (default: none)
    pub fn delay(mut self, delay: Duration) -> Self {
        self.policy.delay = delay;
        self
    }

    /// Wait `delay_s` seconds between attempts
    pub fn delay_s(self, delay_s: f64) -> Self {
        self.delay(Duration::from_secs_f64(delay_s))
    }

    /// Retry only the given failure kinds (default: all)
    pub fn retry_on(mut self, retry_on: RetryOn) -> Self {
        self.policy.retry_on = retry_on;
        self
    }

    /// Replace the whole retry policy. Escape hatch for callers that build
    /// policies up front; overrides anything set by the convenience
    /// methods, last applied wins.
    pub fn policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Target the command at some instance instead of the local process
    /// environment.
    pub fn on(mut self, target: &'t dyn Target) -> Self {
        self.target = Some(target);
        self
    }

    /// Test the output of the executed command against an expected
    /// response. A structurally successful run that fails the condition is
    /// retried like any other failure.
    pub fn until<F>(mut self, condition: F) -> Self
    where
        F: Fn(&CommandOutput) -> bool + 't,
    {
        self.condition = Some(Box::new(condition));
        self
    }

    /// Execute `args` under the session's policy, returning the first
    /// output that satisfies the session (zero exit, condition met).
    pub fn exec<S: AsRef<str>>(self, args: &[S]) -> Result<CommandOutput> {
        self.exec_with(args, &ExecOptions::default())
    }

    /// Execute with explicit options. Output capture is forced on
    /// regardless of `opts` so the success condition and log lines can
    /// inspect the streams.
    pub fn exec_with<S: AsRef<str>>(self, args: &[S], opts: &ExecOptions) -> Result<CommandOutput> {
        let argv: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let opts = ExecOptions {
            capture: true,
            ..opts.clone()
        };

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            let err = match self.attempt(&argv, &opts) {
                Ok(output) => return Ok(output),
                Err(err) => err,
            };

            if !self.policy.permits_retry(attempt, err.kind()) {
                return Err(err);
            }

            match self.policy.max_attempts {
                Some(max) => info!("Attempt {}/{} failed: {}", attempt, max, err),
                None => info!("Attempt {} failed: {}", attempt, err),
            }
            info!("Retrying in {} seconds...", self.policy.delay.as_secs_f64());
            if !self.policy.delay.is_zero() {
                thread::sleep(self.policy.delay);
            }
        }
    }

    /// One attempt: run the command, then evaluate the condition if set
    fn attempt(&self, argv: &[&str], opts: &ExecOptions) -> Result<CommandOutput> {
        let result = match self.target {
            Some(target) => target.exec(argv, opts),
            None => LocalRunner.exec(argv, opts),
        };

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                match &err {
                    Error::CommandFailed {
                        status,
                        stdout,
                        stderr,
                        ..
                    } => {
                        warn!("  rc={}", status);
                        warn!("  stdout={}", String::from_utf8_lossy(stdout));
                        warn!("  stderr={}", String::from_utf8_lossy(stderr));
                    }
                    other => warn!("  {}", other),
                }
                return Err(err);
            }
        };

        if let Some(condition) = &self.condition {
            if !condition(&output) {
                return Err(Error::condition_not_met(output));
            }
        }
        Ok(output)
    }
}
