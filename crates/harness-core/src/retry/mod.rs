//! Retrying command execution
//!
//! Cluster convergence (a node becomes Ready, DNS comes up, a Deployment
//! becomes Available) is eventually consistent; this module provides the
//! single poll-with-retry idiom the rest of the harness uses instead of ad
//! hoc sleep loops. A session distinguishes structural failures (non-zero
//! exit, transport error) from condition failures (zero exit but the
//! caller's predicate rejects the output); both participate in retry the
//! same way.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use harness_core::stubbornly;
//!
//! let out = stubbornly()
//!     .retries(15)
//!     .delay(Duration::from_secs(5))
//!     .until(|p| p.stdout_str().contains(" Ready"))
//!     .exec(&["k8s", "kubectl", "get", "node", "node-1", "--no-headers"])?;
//! # Ok::<(), harness_core::Error>(())
//! ```

mod policy;
mod retriable;

pub use policy::{RetryOn, RetryPolicy};
pub use retriable::{stubbornly, Condition, Retriable};
