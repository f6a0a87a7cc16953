//! # harness-core
//!
//! Core library for the k8s integration-test harness providing:
//! - The [`Target`] abstraction for command execution destinations
//! - A local process runner and the [`run`] helper
//! - The [`stubbornly`] retrying command executor with policy-based
//!   configuration

pub mod error;
pub mod output;
pub mod retry;
pub mod target;

pub use error::{Error, FailureKind, Result};
pub use output::CommandOutput;
pub use retry::{stubbornly, Retriable, RetryOn, RetryPolicy};
pub use target::{run, ExecOptions, LocalRunner, Target};
