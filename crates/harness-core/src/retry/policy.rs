//! Retry policy configuration

use std::time::Duration;

use crate::error::FailureKind;

/// Which failure categories a policy will retry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RetryOn {
    /// Retry every failure, whatever its category (default)
    #[default]
    AnyFailure,

    /// Retry only failures whose [`FailureKind`] appears in the list
    Kinds(Vec<FailureKind>),
}

impl RetryOn {
    /// Whether a failure of the given kind may be retried under this filter
    pub fn permits(&self, kind: FailureKind) -> bool {
        match self {
            RetryOn::AnyFailure => true,
            RetryOn::Kinds(kinds) => kinds.contains(&kind),
        }
    }
}

/// Retry policy for a single command execution session
///
/// Immutable once built; the defaults are retry forever, no delay, retry on
/// any failure. Note that the default is easy to misuse: with no attempt
/// bound and zero delay, a persistently failing local command busy-spins
/// until the process is killed externally. Callers that need a bounded
/// total wait must set both an attempt count and a delay
/// (`attempts x delay ~= timeout`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts; `None` retries indefinitely
    pub max_attempts: Option<u32>,

    /// Fixed delay between attempts; no backoff growth, no jitter
    pub delay: Duration,

    /// Which failure categories trigger a retry
    pub retry_on: RetryOn,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: None,
            delay: Duration::ZERO,
            retry_on: RetryOn::AnyFailure,
        }
    }
}

impl RetryPolicy {
    /// Whether the policy permits another attempt after `attempt` failures
    /// of the given kind. `attempt` is 1-indexed.
    pub fn permits_retry(&self, attempt: u32, kind: FailureKind) -> bool {
        if !self.retry_on.permits(kind) {
            return false;
        }
        match self.max_attempts {
            Some(max) => attempt < max,
            None => true,
        }
    }
}
