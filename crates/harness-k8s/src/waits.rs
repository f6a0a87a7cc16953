//! Readiness polling
//!
//! Every wait in the harness goes through [`stubbornly`]: poll a command on
//! an instance until it succeeds, or until its output says what we want.

use std::time::Duration;

use anyhow::Result;
use tracing::info;

use harness_core::{stubbornly, ExecOptions, Target};

use crate::constants;
use crate::nodes::hostname;

/// Wait until every instance is registered Ready on the control node.
pub fn wait_until_k8s_ready(control_node: &dyn Target, instances: &[&dyn Target]) -> Result<()> {
    for instance in instances {
        let host = hostname(*instance)?;
        let result = stubbornly()
            .retries(15)
            .delay(Duration::from_secs(5))
            .on(control_node)
            .until(|p| p.stdout_str().contains(" Ready"))
            .exec(&[
                "k8s",
                "kubectl",
                "get",
                "node",
                host.as_str(),
                "--no-headers",
            ])?;
        info!("{}", result.stdout_str());
    }
    info!("Kubelet registered successfully!");
    Ok(())
}

/// Wait for DNS to be ready on the instance
pub fn wait_for_dns(instance: &dyn Target) -> Result<()> {
    info!("Waiting for DNS to be ready");
    instance.exec(&["k8s", "x-wait-for", "dns"], &ExecOptions::default())?;
    Ok(())
}

/// Wait for the network to be ready on the instance
pub fn wait_for_network(instance: &dyn Target) -> Result<()> {
    info!("Waiting for network to be ready");
    instance.exec(&["k8s", "x-wait-for", "network"], &ExecOptions::default())?;
    Ok(())
}

/// Wait for the given resource to reach the given condition
pub fn wait_for_resource(
    instance: &dyn Target,
    resource_type: &str,
    name: &str,
    namespace: &str,
    condition: &str,
) -> Result<()> {
    let for_condition = format!("--for=condition={}", condition);
    stubbornly()
        .retries(5)
        .delay(Duration::from_secs(1))
        .on(instance)
        .exec(&[
            "k8s",
            "kubectl",
            "wait",
            "--namespace",
            namespace,
            for_condition.as_str(),
            resource_type,
            name,
            "--timeout",
            "60s",
        ])?;
    Ok(())
}

/// Wait for the given deployment to become Available in the default
/// namespace
pub fn wait_for_deployment(instance: &dyn Target, name: &str) -> Result<()> {
    wait_for_resource(
        instance,
        constants::K8S_DEPLOYMENT,
        name,
        constants::K8S_NS_DEFAULT,
        constants::K8S_CONDITION_AVAILABLE,
    )
}

/// Wait for the given daemonset rollout to complete
pub fn wait_for_daemonset(instance: &dyn Target, name: &str, namespace: &str) -> Result<()> {
    stubbornly()
        .retries(5)
        .delay(Duration::from_secs(1))
        .on(instance)
        .exec(&[
            "k8s",
            "kubectl",
            "rollout",
            "status",
            "--namespace",
            namespace,
            constants::K8S_DAEMONSET,
            name,
            "--timeout",
            "60s",
        ])?;
    Ok(())
}
