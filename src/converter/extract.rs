use super::clock::Clock;
use super::config::merge_scope_into;
use crate::flow::{FlowTree, NodeKind};

const PROMOTED_NAME_PREFIX: &str = "az";

/// Splits nested-flow nodes out of a tree into independent top-level flows.
///
/// Each nested-flow node is promoted to its own `FlowTree`: it takes a fresh
/// `az-<timestamp>-<name>` name, its children as nodes, and the parent's scope
/// configuration merged over its local configuration (parent wins on
/// collision). Promoted trees are themselves extracted again, so the output
/// only ever contains flat task lists. Remaining task nodes, if any, form one
/// final tree under the original name and scope, emitted last.
///
/// Extraction is a partition: every node of the input appears in exactly one
/// output tree, and the input tree is consumed rather than aliased.
pub fn extract(tree: FlowTree, clock: &dyn Clock) -> Vec<FlowTree> {
    let FlowTree {
        name,
        scope_config,
        nodes,
    } = tree;

    let mut promoted = Vec::new();
    let mut remaining = Vec::new();
    for node in nodes {
        match node.kind {
            NodeKind::NestedFlow { nodes: children } => {
                let flow_name = format!(
                    "{}-{}-{}",
                    PROMOTED_NAME_PREFIX,
                    clock.flow_timestamp(),
                    node.name
                );
                // A node without local configuration adopts the parent scope
                // wholesale; that is the degenerate case of the same merge.
                let merged = merge_scope_into(node.local_config, &scope_config);
                tracing::debug!("Promoting nested flow '{}' as '{}'", node.name, flow_name);
                promoted.extend(extract(
                    FlowTree {
                        name: flow_name,
                        scope_config: merged,
                        nodes: children,
                    },
                    clock,
                ));
            }
            NodeKind::Task { .. } => remaining.push(node),
        }
    }

    if !remaining.is_empty() {
        promoted.push(FlowTree {
            name,
            scope_config,
            nodes: remaining,
        });
    }
    promoted
}
