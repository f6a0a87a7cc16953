mod common;

use common::{FakeInstance, Step};
use harness_k8s::waits;

#[test]
fn node_ready_wait_polls_control_node() {
    let instance = FakeInstance::new(vec![Step::ok("node-1\n")]);
    let control = FakeInstance::new(vec![Step::ok("node-1   Ready   control-plane   2m   v1.32.0")]);

    waits::wait_until_k8s_ready(&control, &[&instance]).unwrap();

    // One hostname lookup on the instance, one satisfied poll on the
    // control node.
    assert_eq!(instance.calls(), vec![vec!["hostname".to_string()]]);
    assert_eq!(
        control.calls(),
        vec![vec![
            "k8s",
            "kubectl",
            "get",
            "node",
            "node-1",
            "--no-headers"
        ]]
    );
}

#[test]
fn node_ready_wait_checks_every_instance() {
    let node_a = FakeInstance::new(vec![Step::ok("node-a\n")]);
    let node_b = FakeInstance::new(vec![Step::ok("node-b\n")]);
    let control = FakeInstance::new(vec![Step::ok(" Ready ")]);

    waits::wait_until_k8s_ready(&control, &[&node_a, &node_b]).unwrap();

    let polled: Vec<String> = control.calls().iter().map(|c| c[4].clone()).collect();
    assert_eq!(polled, vec!["node-a", "node-b"]);
}

#[test]
fn resource_wait_builds_kubectl_wait_command_and_retries() {
    let instance = FakeInstance::new(vec![
        Step::fail(1, "error: timed out waiting for the condition"),
        Step::ok(""),
    ]);

    waits::wait_for_resource(&instance, "deployment.apps", "coredns", "kube-system", "Available")
        .unwrap();

    assert_eq!(instance.call_count(), 2);
    assert_eq!(
        instance.calls()[0],
        vec![
            "k8s",
            "kubectl",
            "wait",
            "--namespace",
            "kube-system",
            "--for=condition=Available",
            "deployment.apps",
            "coredns",
            "--timeout",
            "60s",
        ]
    );
}

#[test]
fn deployment_wait_defaults_to_available_in_default_namespace() {
    let instance = FakeInstance::new(vec![Step::ok("")]);

    waits::wait_for_deployment(&instance, "nginx").unwrap();

    assert_eq!(
        instance.calls()[0],
        vec![
            "k8s",
            "kubectl",
            "wait",
            "--namespace",
            "default",
            "--for=condition=Available",
            "deployment.apps",
            "nginx",
            "--timeout",
            "60s",
        ]
    );
}

#[test]
fn daemonset_wait_uses_rollout_status() {
    let instance = FakeInstance::new(vec![Step::ok("daemon set \"cilium\" successfully rolled out")]);

    waits::wait_for_daemonset(&instance, "cilium", "kube-system").unwrap();

    assert_eq!(
        instance.calls()[0],
        vec![
            "k8s",
            "kubectl",
            "rollout",
            "status",
            "--namespace",
            "kube-system",
            "daemonset.apps",
            "cilium",
            "--timeout",
            "60s",
        ]
    );
}

#[test]
fn dns_and_network_waits_call_the_product_cli() {
    let instance = FakeInstance::new(vec![Step::ok("")]);

    waits::wait_for_dns(&instance).unwrap();
    waits::wait_for_network(&instance).unwrap();

    assert_eq!(
        instance.calls(),
        vec![
            vec!["k8s".to_string(), "x-wait-for".to_string(), "dns".to_string()],
            vec![
                "k8s".to_string(),
                "x-wait-for".to_string(),
                "network".to_string()
            ],
        ]
    );
}

#[test]
fn resource_wait_surfaces_exhaustion() {
    let instance = FakeInstance::new(vec![Step::fail(1, "timed out")]);

    let err =
        waits::wait_for_resource(&instance, "deployment.apps", "nginx", "default", "Available")
            .unwrap_err();

    assert_eq!(instance.call_count(), 5);
    assert!(err.to_string().contains("exited with status 1"));
}
