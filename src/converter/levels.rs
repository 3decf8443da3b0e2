use crate::error::ConvertError;
use crate::flow::FlowNode;
use ahash::{AHashMap, AHashSet};

/// Computes, for every node in one sibling scope, its maximum dependency depth:
/// 0 for a node without dependencies, otherwise one more than the deepest
/// dependency. Levels only order dependency lists for layout; they never drive
/// execution order.
///
/// Fails with `UndefinedDependency` when a `depends_on` entry names no sibling,
/// and with `CyclicDependency` when the dependency relation is not acyclic.
pub fn resolve_levels(nodes: &[FlowNode]) -> Result<AHashMap<String, u32>, ConvertError> {
    let by_name: AHashMap<&str, &FlowNode> =
        nodes.iter().map(|n| (n.name.as_str(), n)).collect();

    let mut levels: AHashMap<String, u32> = AHashMap::with_capacity(nodes.len());
    let mut visiting: AHashSet<&str> = AHashSet::new();
    for node in nodes {
        level_of(node, &by_name, &mut levels, &mut visiting)?;
    }
    Ok(levels)
}

fn level_of<'a>(
    node: &'a FlowNode,
    by_name: &AHashMap<&str, &'a FlowNode>,
    levels: &mut AHashMap<String, u32>,
    visiting: &mut AHashSet<&'a str>,
) -> Result<u32, ConvertError> {
    if let Some(level) = levels.get(node.name.as_str()) {
        return Ok(*level);
    }
    // A node re-entered on the current walk means the graph is not a DAG.
    if !visiting.insert(node.name.as_str()) {
        return Err(ConvertError::CyclicDependency {
            node: node.name.clone(),
        });
    }

    let mut level = 0;
    for reference in &node.depends_on {
        let dependency = by_name.get(reference.as_str()).copied().ok_or_else(|| {
            ConvertError::UndefinedDependency {
                node: node.name.clone(),
                reference: reference.clone(),
            }
        })?;
        level = level.max(level_of(dependency, by_name, levels, visiting)? + 1);
    }

    visiting.remove(node.name.as_str());
    levels.insert(node.name.clone(), level);
    Ok(level)
}
