//! Shared Kubernetes naming constants

pub const K8S_NS_DEFAULT: &str = "default";
pub const K8S_NS_KUBE_SYSTEM: &str = "kube-system";

pub const K8S_DAEMONSET: &str = "daemonset.apps";
pub const K8S_DEPLOYMENT: &str = "deployment.apps";

pub const K8S_CONDITION_AVAILABLE: &str = "Available";
pub const K8S_CONDITION_READY: &str = "Ready";
