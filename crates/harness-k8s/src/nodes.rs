//! Node inspection helpers
//!
//! Thin wrappers over `k8s kubectl get nodes -o json` and related per-node
//! commands, executed against a harness instance.

use std::collections::HashMap;

use anyhow::{bail, Result};
use serde::Deserialize;

use harness_core::{ExecOptions, Target};

/// A node entry from `kubectl get nodes -o json`
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub metadata: NodeMetadata,
    #[serde(default)]
    pub status: NodeStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeMetadata {
    pub name: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeStatus {
    #[serde(default)]
    pub conditions: Vec<NodeCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct NodeList {
    kind: String,
    items: Vec<Node>,
}

impl Node {
    /// A node is healthy when every condition other than Ready reports
    /// False (no pressure, no unavailability).
    pub fn is_ready(&self) -> bool {
        self.status
            .conditions
            .iter()
            .filter(|c| c.condition_type != "Ready")
            .all(|c| c.status == "False")
    }
}

/// Return the hostname of the given instance
pub fn hostname(instance: &dyn Target) -> Result<String> {
    let out = instance.exec(&["hostname"], &ExecOptions::captured())?;
    Ok(out.stdout_str().trim().to_string())
}

/// Return the local node status reported by the product CLI
pub fn get_local_node_status(instance: &dyn Target) -> Result<String> {
    let out = instance.exec(&["k8s", "local-node-status"], &ExecOptions::captured())?;
    Ok(out.stdout_str().trim().to_string())
}

/// Get a list of existing nodes, as seen from the control node
pub fn get_nodes(control_node: &dyn Target) -> Result<Vec<Node>> {
    let out = control_node.exec(
        &["k8s", "kubectl", "get", "nodes", "-o", "json"],
        &ExecOptions::captured(),
    )?;
    let list: NodeList = serde_json::from_slice(&out.stdout)?;
    if list.kind != "List" {
        bail!("expected a List of nodes, got kind {}", list.kind);
    }
    Ok(list.items)
}

/// Get the subset of nodes that are currently healthy
pub fn ready_nodes(control_node: &dyn Target) -> Result<Vec<Node>> {
    Ok(get_nodes(control_node)?
        .into_iter()
        .filter(Node::is_ready)
        .collect())
}
