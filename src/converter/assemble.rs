use super::{config, levels, resource};
use crate::document::{
    Connect, LayoutEntry, LayoutMap, ProcessData, ProcessDefinition, ResourceEntry,
    TaskDescriptor, TaskParams, TaskTimeout, encode,
};
use crate::error::ConvertError;
use crate::flow::{FlowTree, NodeKind};
use itertools::Itertools;
use std::cmp::Reverse;

/// Combines level resolution, config resolution and resource extraction into
/// one target-schema document for a single flat flow.
pub fn assemble(tree: &FlowTree, project_name: &str) -> Result<ProcessDefinition, ConvertError> {
    let levels = levels::resolve_levels(&tree.nodes)?;
    let retry = config::resolve_retry(&tree.scope_config)?;

    let mut tasks = Vec::with_capacity(tree.nodes.len());
    for node in &tree.nodes {
        let command = match &node.kind {
            NodeKind::Task { command } => command,
            NodeKind::NestedFlow { .. } => {
                return Err(ConvertError::UnexpandedSubflow {
                    node: node.name.clone(),
                });
            }
        };
        let resolved = resource::extract_resource(command, &tree.scope_config);
        tasks.push(TaskDescriptor {
            worker_group_id: 1,
            description: String::new(),
            run_flag: "NORMAL".to_string(),
            task_type: "SHELL".to_string(),
            params: TaskParams {
                raw_script: resolved.command,
                local_params: Vec::new(),
                resource_list: vec![ResourceEntry {
                    res: resolved.resource,
                }],
            },
            timeout: TaskTimeout {
                enable: false,
                strategy: String::new(),
            },
            max_retry_times: retry.max_retry_times.clone(),
            task_instance_priority: "MEDIUM".to_string(),
            name: node.name.clone(),
            dependence: serde_json::Map::new(),
            retry_interval: retry.retry_interval.clone(),
            pre_tasks: node.depends_on.clone(),
            id: node.name.clone(),
        });
    }

    let process_data = ProcessData {
        tenant_id: -1,
        timeout: 0,
        global_params: config::global_params(&tree.scope_config),
        tasks,
    };

    let mut locations = LayoutMap::new();
    for node in &tree.nodes {
        let mut targets = node.depends_on.clone();
        // Deeper dependencies first; the sort is stable so ties keep their
        // declared order. Every entry has a level after resolve_levels.
        targets.sort_by_key(|name| Reverse(levels.get(name).copied().unwrap_or(0)));
        locations.insert(
            node.name.clone(),
            LayoutEntry {
                name: node.name.clone(),
                targetarr: targets.iter().join(","),
                x: 0,
                y: 0,
            },
        );
    }

    let connects: Vec<Connect> = tree
        .nodes
        .iter()
        .flat_map(|node| {
            node.depends_on.iter().map(|dependency| Connect {
                end_point_source_id: dependency.clone(),
                end_point_target_id: node.name.clone(),
            })
        })
        .collect();

    Ok(ProcessDefinition {
        project_name: project_name.to_string(),
        process_definition_name: tree.name.clone(),
        process_definition_description: String::new(),
        process_definition_json: encode(&process_data)?,
        process_definition_locations: encode(&locations)?,
        process_definition_connects: encode(&connects)?,
    })
}
