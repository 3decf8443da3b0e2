//! Common test utilities for building flow trees and configurations.
use ahash::AHashMap;
use henkan::prelude::*;

/// The timestamp every test clock reports.
#[allow(dead_code)]
pub const TEST_TIMESTAMP: &str = "20240101120000";

#[allow(dead_code)]
pub fn fixed_clock() -> Box<dyn Clock> {
    Box::new(FixedClock::new(TEST_TIMESTAMP))
}

#[allow(dead_code)]
pub fn config(entries: &[(&str, &str)]) -> AHashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Creates a task node with the given dependencies and command.
#[allow(dead_code)]
pub fn task(name: &str, depends_on: &[&str], command: &str) -> FlowNode {
    FlowNode {
        name: name.to_string(),
        depends_on: depends_on.iter().map(|d| d.to_string()).collect(),
        local_config: AHashMap::new(),
        kind: NodeKind::Task {
            command: command.to_string(),
        },
    }
}

/// Creates a nested-flow node with its own local configuration and children.
#[allow(dead_code)]
pub fn nested(name: &str, local_config: &[(&str, &str)], children: Vec<FlowNode>) -> FlowNode {
    FlowNode {
        name: name.to_string(),
        depends_on: vec![],
        local_config: config(local_config),
        kind: NodeKind::NestedFlow { nodes: children },
    }
}

#[allow(dead_code)]
pub fn tree(name: &str, scope_config: &[(&str, &str)], nodes: Vec<FlowNode>) -> FlowTree {
    FlowTree {
        name: name.to_string(),
        scope_config: config(scope_config),
        nodes,
    }
}

/// Creates the `daily` flow used across tests:
/// A (no deps), B (depends on A), C (depends on A and B).
#[allow(dead_code)]
pub fn create_daily_flow() -> FlowTree {
    tree(
        "daily",
        &[("retries", "2"), ("retry.backoff", "300000"), ("owner", "etl")],
        vec![
            task("A", &[], "echo A"),
            task("B", &["A"], "echo B"),
            task("C", &["A", "B"], "echo C"),
        ],
    )
}
