//! Cluster bootstrap and membership helpers

use anyhow::Result;
use tracing::info;

use harness_core::{ExecOptions, Target};

use crate::nodes::hostname;

/// Install the k8s snap on the given instance
pub fn setup_k8s_snap(instance: &dyn Target, channel: &str) -> Result<()> {
    info!("Install k8s snap");
    instance.exec(
        &["snap", "install", "k8s", "--classic", "--channel", channel],
        &ExecOptions::default(),
    )?;
    Ok(())
}

/// Remove the k8s snap and all of its state from the given instance
pub fn purge_k8s_snap(instance: &dyn Target) -> Result<()> {
    info!("Purge k8s snap");
    instance.exec(
        &["sudo", "snap", "remove", "k8s", "--purge"],
        &ExecOptions::default(),
    )?;
    Ok(())
}

/// Bootstrap the cluster on the instance from a config file already on it
pub fn bootstrap(instance: &dyn Target, config_path: &str) -> Result<()> {
    instance.exec(
        &["k8s", "bootstrap", "--file", config_path],
        &ExecOptions::default(),
    )?;
    Ok(())
}

/// Create a token on an existing cluster member for joining another node.
/// `extra_args` is passed through to `k8s get-join-token` (e.g. `--worker`).
pub fn get_join_token(
    initial_node: &dyn Target,
    joining_node: &dyn Target,
    extra_args: &[&str],
) -> Result<String> {
    let name = hostname(joining_node)?;
    let mut args = vec!["k8s", "get-join-token", name.as_str()];
    args.extend_from_slice(extra_args);
    let out = initial_node.exec(&args, &ExecOptions::captured())?;
    Ok(out.stdout_str().trim().to_string())
}

/// Join an existing cluster using a token from [`get_join_token`]
pub fn join_cluster(instance: &dyn Target, join_token: &str) -> Result<()> {
    instance.exec(
        &["k8s", "join-cluster", join_token],
        &ExecOptions::default(),
    )?;
    Ok(())
}
