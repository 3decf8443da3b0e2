use super::conversion::IntoFlowTree;
use super::definition::{FlowNode, FlowTree, NodeKind};
use crate::error::{FlowConversionError, LoadError};
use ahash::{AHashMap, AHashSet};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const FLOW_FILE_SUFFIX: &str = ".flow";
const FLOW_NODE_TYPE: &str = "flow";
const COMMAND_KEY: &str = "command";

/// Raw YAML shape of a `.flow` definition file, before validation.
#[derive(Debug, Deserialize)]
struct RawFlow {
    #[serde(skip)]
    name: String,
    #[serde(default)]
    config: AHashMap<String, serde_yaml::Value>,
    #[serde(default)]
    nodes: Vec<RawNode>,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    name: String,
    #[serde(rename = "type", default)]
    node_type: Option<String>,
    #[serde(default)]
    config: AHashMap<String, serde_yaml::Value>,
    #[serde(rename = "dependsOn", default)]
    depends_on: Vec<String>,
    #[serde(default)]
    nodes: Vec<RawNode>,
}

/// Loads an Azkaban-style `.flow` YAML file into a canonical `FlowTree`.
///
/// The flow takes its name from the file stem. Fails on a non-`.flow` suffix,
/// unreadable bytes, malformed YAML, an empty document, or a definition that
/// violates the flow model's shape.
pub fn load_flow_file(path: &Path) -> Result<FlowTree, LoadError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if !file_name.ends_with(FLOW_FILE_SUFFIX) {
        return Err(LoadError::UnsupportedFile(file_name));
    }

    let text = fs::read_to_string(path).map_err(|e| LoadError::Unreadable {
        path: file_name.clone(),
        message: e.to_string(),
    })?;

    let document: serde_yaml::Value =
        serde_yaml::from_str(&text).map_err(|e| LoadError::Malformed {
            path: file_name.clone(),
            message: e.to_string(),
        })?;
    if document.is_null() {
        return Err(LoadError::EmptyDefinition(file_name));
    }

    let mut raw: RawFlow = serde_yaml::from_value(document).map_err(|e| LoadError::Malformed {
        path: file_name.clone(),
        message: e.to_string(),
    })?;
    if raw.nodes.is_empty() {
        return Err(LoadError::EmptyDefinition(file_name));
    }

    // Flow name comes from the file, not the document.
    raw.name = flow_name(&file_name);

    let tree = raw.into_flow_tree()?;
    tracing::info!(
        "Loaded flow '{}' with {} top-level nodes from {}",
        tree.name,
        tree.nodes.len(),
        file_name
    );
    Ok(tree)
}

fn flow_name(file_name: &str) -> String {
    file_name
        .strip_suffix(FLOW_FILE_SUFFIX)
        .unwrap_or(file_name)
        .to_string()
}

impl IntoFlowTree for RawFlow {
    fn into_flow_tree(self) -> Result<FlowTree, FlowConversionError> {
        Ok(FlowTree {
            scope_config: stringify_config(&self.name, self.config)?,
            nodes: convert_siblings(self.nodes)?,
            name: self.name,
        })
    }
}

fn convert_siblings(raws: Vec<RawNode>) -> Result<Vec<FlowNode>, FlowConversionError> {
    let mut seen: AHashSet<String> = AHashSet::with_capacity(raws.len());
    let mut nodes = Vec::with_capacity(raws.len());
    for raw in raws {
        if !seen.insert(raw.name.clone()) {
            return Err(FlowConversionError::ValidationError(format!(
                "Duplicate node name '{}' in sibling scope",
                raw.name
            )));
        }
        nodes.push(convert_node(raw)?);
    }
    Ok(nodes)
}

fn convert_node(raw: RawNode) -> Result<FlowNode, FlowConversionError> {
    let mut local_config = stringify_config(&raw.name, raw.config)?;
    let is_flow = raw.node_type.as_deref() == Some(FLOW_NODE_TYPE);

    let kind = if is_flow {
        if raw.nodes.is_empty() {
            return Err(FlowConversionError::ValidationError(format!(
                "Nested flow '{}' has no child nodes",
                raw.name
            )));
        }
        NodeKind::NestedFlow {
            nodes: convert_siblings(raw.nodes)?,
        }
    } else {
        if !raw.nodes.is_empty() {
            return Err(FlowConversionError::ValidationError(format!(
                "Node '{}' carries child nodes but is not of type 'flow'",
                raw.name
            )));
        }
        // The raw format stores a task's command as a plain config entry;
        // the model lifts it out of the node's configuration.
        let command = local_config.remove(COMMAND_KEY).ok_or_else(|| {
            FlowConversionError::ValidationError(format!(
                "Task node '{}' has no '{}' entry",
                raw.name, COMMAND_KEY
            ))
        })?;
        NodeKind::Task { command }
    };

    Ok(FlowNode {
        name: raw.name,
        depends_on: raw.depends_on,
        local_config,
        kind,
    })
}

fn stringify_config(
    owner: &str,
    raw: AHashMap<String, serde_yaml::Value>,
) -> Result<AHashMap<String, String>, FlowConversionError> {
    let mut config = AHashMap::with_capacity(raw.len());
    for (key, value) in raw {
        let text = match value {
            serde_yaml::Value::String(s) => s,
            serde_yaml::Value::Number(n) => n.to_string(),
            serde_yaml::Value::Bool(b) => b.to_string(),
            other => {
                return Err(FlowConversionError::ValidationError(format!(
                    "Config entry '{}' of '{}' is not a scalar value: {:?}",
                    key, owner, other
                )));
            }
        };
        config.insert(key, text);
    }
    Ok(config)
}
