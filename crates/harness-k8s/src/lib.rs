//! # harness-k8s
//!
//! Kubernetes-side helpers for the integration-test harness: node
//! inspection, readiness polling via [`harness_core::stubbornly`], and
//! cluster bootstrap/membership commands. All helpers run against a
//! [`harness_core::Target`], so they work the same on a local runner or a
//! remote test instance.

pub mod cluster;
pub mod constants;
pub mod nodes;
pub mod waits;

pub use cluster::{bootstrap, get_join_token, join_cluster, purge_k8s_snap, setup_k8s_snap};
pub use nodes::{get_local_node_status, get_nodes, hostname, ready_nodes, Node};
pub use waits::{
    wait_for_daemonset, wait_for_deployment, wait_for_dns, wait_for_network, wait_for_resource,
    wait_until_k8s_ready,
};
